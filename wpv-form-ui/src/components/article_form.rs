//! The article query form: country, date and access type.

use crate::browser::BrowserGeolocation;
use crate::components::{CountryPicker, FieldError};
use crate::state::ToastState;
use dioxus::prelude::*;
use wpv_form::location::{resolve_location, Lifetime};
use wpv_form::lookup::HttpCountryLookup;
use wpv_form::regions::{DEFAULT_CONTINENT, DEFAULT_COUNTRY};
use wpv_form::{Access, ArticleFormModel, FormField, SubmitPayload};

#[derive(Props, Clone, PartialEq)]
pub struct ArticleFormProps {
    /// Called once per valid submission
    pub on_submit: EventHandler<SubmitPayload>,
    /// Only switches the button label
    #[props(default = false)]
    pub loading: bool,
    /// Country the picker should show, e.g. from the page URL
    #[props(!optional)]
    pub country_url: Option<String>,
    /// Continent the picker should show
    #[props(!optional)]
    pub continent_url: Option<String>,
}

/// Form collecting the parameters of a top-articles query.
///
/// On mount it tries to locate the user and fill in the country. Errors
/// are shown inline and through the `ToastState` context, which must be
/// provided by an ancestor.
#[component]
pub fn ArticleForm(props: ArticleFormProps) -> Element {
    let mut model = use_signal(ArticleFormModel::for_current_week);
    let toasts = use_context::<ToastState>();
    let lifetime = use_hook(Lifetime::new);

    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.end());
    }

    // Locate the user once on mount
    use_hook(move || {
        spawn(async move {
            let lookup = HttpCountryLookup::new();
            let outcome = resolve_location(&BrowserGeolocation, &lookup, &toasts, &lifetime, |code| {
                model.write().apply_located_country(&code)
            })
            .await;
            log::debug!("Location resolution finished: {:?}", outcome);
        });
    });

    // Host-supplied picker values
    use_effect(use_reactive(
        (&props.country_url, &props.continent_url),
        move |(country_url, continent_url)| {
            model
                .write()
                .apply_external_defaults(country_url.as_deref(), continent_url.as_deref());
        },
    ));

    let on_field_change = move |field: FormField| {
        move |evt: Event<FormData>| {
            if let Err(e) = model.write().change_field(field, &evt.value()) {
                log::warn!("Ignoring field change: {}", e);
            }
        }
    };

    let on_submit = props.on_submit;
    let on_form_submit = move |evt: FormEvent| {
        evt.prevent_default();
        model
            .write()
            .submit(&toasts, |payload| on_submit.call(payload));
    };

    let current = model.read().clone();
    let button_label = if props.loading {
        "Envoie en cours..."
    } else {
        "Envoyer"
    };

    rsx! {
        form {
            class: "formBorder",
            style: "width: 100%; padding: 20px 0; border: 1px solid #E0E0E0; border-radius: 12px;",
            onsubmit: on_form_submit,
            div {
                style: "display: flex; flex-direction: column; gap: 8px; align-items: center; width: 100%;",
                p {
                    class: "date",
                    style: "margin: 0 0 8px 0; padding: 20px 0; font-size: 20px; text-align: center;",
                    "Veuillez remplir le formulaire pour obtenir les articles souhaités"
                }
                div {
                    class: "inputs",
                    style: "display: flex; gap: 16px; flex-wrap: wrap; justify-content: center;",
                    div {
                        style: "display: flex; gap: 16px;",
                        CountryPicker {
                            country: current.selection.country.clone(),
                            continent: current.selection.continent.clone(),
                            on_change_country: move |country: String| model.write().pick_country(&country),
                            on_change_continent: move |continent: String| model.write().pick_continent(&continent),
                            default_country: DEFAULT_COUNTRY.to_string(),
                            default_continent: DEFAULT_CONTINENT.to_string(),
                        }
                        if let Some(message) = current.errors.get(FormField::Country) {
                            FieldError { message: message.to_string() }
                        }
                    }
                    div {
                        class: "select_container country_select",
                        label {
                            r#for: "fullDate",
                            class: "select_label",
                            style: "display: block; font-weight: bold;",
                            "Date"
                        }
                        input {
                            id: "fullDate",
                            r#type: "date",
                            name: "date",
                            class: "select_options",
                            value: "{current.form.date}",
                            onchange: on_field_change(FormField::Date),
                        }
                        if let Some(message) = current.errors.get(FormField::Date) {
                            FieldError { message: message.to_string() }
                        }
                    }
                    div {
                        class: "select_container country_select",
                        label {
                            r#for: "access-select",
                            class: "select_label",
                            style: "display: block; font-weight: bold;",
                            "Platform"
                        }
                        select {
                            id: "access-select",
                            name: "access",
                            class: "select_options",
                            onchange: on_field_change(FormField::Access),
                            for access in Access::ALL {
                                option {
                                    value: "{access}",
                                    selected: access == current.form.access,
                                    "{access}"
                                }
                            }
                        }
                        if let Some(message) = current.errors.get(FormField::Access) {
                            FieldError { message: message.to_string() }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    style: "margin: 20px 0; padding: 11px 24px; width: 224px; background: #22C55E; color: white; border: none; font-size: 18px; font-weight: 600; cursor: pointer;",
                    "{button_label}"
                }
            }
        }
    }
}

