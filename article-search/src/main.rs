//! Top Articles per Country
//!
//! Hosts the article query form and lists the most viewed Wikipedia
//! articles for the submitted country, access type and day.
//!
//! Data flow:
//! 1. `country` / `continent` query parameters of the page seed the picker.
//! 2. The form locates the user and fills in the country on mount.
//! 3. A valid submission triggers a pageviews API request; `loading` is
//!    held while it runs.
//! 4. Results (or the request error) render under the form.

mod articles;

use articles::{fetch_top_articles, TopArticle, DISPLAY_LIMIT};
use dioxus::prelude::*;
use wpv_form::notify::{Notifier, ToastOptions};
use wpv_form::SubmitPayload;
use wpv_form_ui::browser;
use wpv_form_ui::components::{ArticleForm, ToastContainer};
use wpv_form_ui::state::ToastState;

/// DOM element the app mounts into.
const ROOT_ID: &str = "article-search-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let toasts = use_context_provider(ToastState::new);
    let mut loading = use_signal(|| false);
    let mut query = use_signal(|| None::<SubmitPayload>);
    let mut articles = use_signal(Vec::<TopArticle>::new);
    let mut error_msg = use_signal(|| None::<String>);

    let country_url = use_hook(|| browser::query_param("country"));
    let continent_url = use_hook(|| browser::query_param("continent"));

    let on_submit = move |payload: SubmitPayload| {
        loading.set(true);
        error_msg.set(None);
        query.set(Some(payload.clone()));
        spawn(async move {
            match fetch_top_articles(&payload).await {
                Ok(found) => articles.set(found),
                Err(e) => {
                    log::error!("Failed to fetch top articles: {:#}", e);
                    articles.set(Vec::new());
                    error_msg.set(Some(format!("{:#}", e)));
                    toasts.error(
                        "Impossible de récupérer les articles.",
                        &ToastOptions::default(),
                    );
                }
            }
            loading.set(false);
        });
    };

    let shown: Vec<(u32, String, String, u64)> = articles
        .read()
        .iter()
        .take(DISPLAY_LIMIT)
        .map(|a: &TopArticle| (a.rank, a.url(), a.title(), a.views_ceil))
        .collect();
    let query_url = query().map(|payload| payload.top_articles_url());

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 { style: "margin: 0 0 12px 0;", "Articles les plus consultés" }

            ArticleForm {
                on_submit: on_submit,
                loading: loading(),
                country_url: country_url.clone(),
                continent_url: continent_url.clone(),
            }

            if let Some(url) = query_url {
                p {
                    style: "margin: 12px 0 4px 0; font-size: 12px; color: #616161; word-break: break-all;",
                    "{url}"
                }
            }

            if let Some(err) = error_msg() {
                div {
                    style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                    strong { "Erreur : " }
                    "{err}"
                }
            } else if loading() {
                div {
                    style: "display: flex; justify-content: center; padding: 40px; color: #666;",
                    "Chargement des articles..."
                }
            } else if !shown.is_empty() {
                ol {
                    style: "margin-top: 16px; line-height: 1.6;",
                    for (rank, url, title, views) in shown {
                        li {
                            key: "{rank}",
                            a { href: "{url}", target: "_blank", "{title}" }
                            span { style: "color: #757575; margin-left: 8px;", "{views} vues" }
                        }
                    }
                }
            }

            ToastContainer {}
        }
    }
}
