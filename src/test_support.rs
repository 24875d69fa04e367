use chrono::NaiveDate;

use crate::{
    cli::Cli,
    domain::{dates::parse_date, show::Show},
};

pub(crate) fn date(value: &str) -> NaiveDate {
    parse_date(value).expect("valid date fixture")
}

pub(crate) fn show(id: &str, date: &str) -> Show {
    Show::new(id, date, format!("Band {id}")).with_details("9:00 PM", "$10")
}

pub(crate) fn test_cli() -> Cli {
    Cli {
        project: Some("little-red-hen".to_string()),
        collection: None,
        api_key: None,
        base_url: None,
        today: None,
        hero_days: None,
        format: None,
        output: None,
        watch: false,
        refresh_interval: None,
        save_settings: false,
        verbose: 0,
        quiet: 0,
    }
}
