//! Headless form submission.

use anyhow::anyhow;
use chrono::Local;
use log::info;
use wpv_form::notify::LogNotifier;
use wpv_form::{ArticleFormModel, FormField, SubmitPayload};
use wpv_utils::dates;

/// Monday of the week containing `date`, or of the current week.
pub fn week_start(date: Option<&str>) -> anyhow::Result<String> {
    let date = match date {
        Some(s) => dates::parse_date(s)?,
        None => Local::now().date_naive(),
    };
    Ok(dates::format_date(&dates::week_start(&date)))
}

/// Fill a fresh form with the given values and submit it.
///
/// Returns the payload, or an error listing every validation message.
pub fn build_payload(
    country: &str,
    date: Option<&str>,
    access: &str,
) -> anyhow::Result<SubmitPayload> {
    let mut model = ArticleFormModel::for_current_week();
    model.change_field(FormField::Country, country)?;
    if let Some(date) = date {
        model.change_field(FormField::Date, date)?;
    }
    model.change_field(FormField::Access, access)?;

    let mut submitted = None;
    model.submit(&LogNotifier, |payload| submitted = Some(payload));

    submitted.ok_or_else(|| {
        let messages: Vec<String> = model
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        anyhow!("Invalid form: {}", messages.join(", "))
    })
}

pub fn run_submit(country: &str, date: Option<&str>, access: &str) -> anyhow::Result<()> {
    let payload = build_payload(country, date, access)?;
    info!("Top articles query: {}", payload.top_articles_url());
    println!("{}", serde_json::to_string_pretty(&payload)?);
    println!("{}", payload.top_articles_url());
    Ok(())
}
