use dotenv::dotenv;
use gewinnzahlen::{DrawReport, DrawScraper, ScrapeError, ScrapingContext, adjusted_today, build_report};
use log::{LevelFilter, error, info};

async fn run_draw_report_job(context: &ScrapingContext) -> Result<DrawReport, ScrapeError> {
    let config = &context.scraping_config;
    let reference = adjusted_today(config.clock_offset_hours);
    let scraper = DrawScraper::new(config.draw_page_url.clone(), &context.request_client);
    let numbers = scraper.scrape(reference).await?;
    let report = build_report(reference, &config.calendar_ids, &numbers);
    info!(
        "{} of {} tickets won on {}",
        report.items.iter().filter(|item| item.won).count(),
        report.items.len(),
        report.draw_date
    );
    Ok(report)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let context = match ScrapingContext::new() {
        Ok(context) => context,
        Err(e) => {
            error!("Could not set up scraping context: {e}");
            std::process::exit(1);
        }
    };

    match run_draw_report_job(&context).await {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Could not serialize draw report: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Draw report job failed: {e}");
            std::process::exit(1);
        }
    }
}
