//! Continent and country dropdowns.

use dioxus::prelude::*;
use wpv_form::regions::{self, DEFAULT_CONTINENT, DEFAULT_COUNTRY};

#[derive(Props, Clone, PartialEq)]
pub struct CountryPickerProps {
    /// Country code currently shown
    pub country: String,
    /// Continent whose countries are listed
    pub continent: String,
    pub on_change_country: EventHandler<String>,
    pub on_change_continent: EventHandler<String>,
    #[props(default = DEFAULT_COUNTRY.to_string())]
    pub default_country: String,
    #[props(default = DEFAULT_CONTINENT.to_string())]
    pub default_continent: String,
}

/// Two linked selects: the continent narrows the country list.
/// Unknown values fall back to the defaults for display.
#[component]
pub fn CountryPicker(props: CountryPickerProps) -> Element {
    let continent = if regions::countries_in(&props.continent).is_empty() {
        props.default_continent.clone()
    } else {
        props.continent.clone()
    };
    let countries = regions::countries_in(&continent);
    let country = if props.country.is_empty() {
        props.default_country.clone()
    } else {
        props.country.clone()
    };
    let listed = countries.iter().any(|c| c.code == country);
    // A code from another continent still shows its name when the table knows it
    let unlisted_label = match regions::find_country(&country) {
        Some(known) => format!("{} ({})", known.name, known.code),
        None => country.clone(),
    };

    let on_change_continent = props.on_change_continent;
    let on_change_country = props.on_change_country;

    rsx! {
        div {
            class: "select_container continent_select",
            label {
                r#for: "continent-select",
                class: "select_label",
                style: "display: block; font-weight: bold;",
                "Continent"
            }
            select {
                id: "continent-select",
                class: "select_options",
                onchange: move |evt: Event<FormData>| on_change_continent.call(evt.value()),
                for name in regions::continent_names() {
                    option {
                        value: "{name}",
                        selected: name == continent,
                        "{name}"
                    }
                }
            }
        }
        div {
            class: "select_container country_select",
            label {
                r#for: "country-select",
                class: "select_label",
                style: "display: block; font-weight: bold;",
                "Pays"
            }
            select {
                id: "country-select",
                name: "country",
                class: "select_options",
                onchange: move |evt: Event<FormData>| on_change_country.call(evt.value()),
                if !listed {
                    option {
                        value: "{country}",
                        selected: true,
                        "{unlisted_label}"
                    }
                }
                for c in countries.iter() {
                    option {
                        value: "{c.code}",
                        selected: c.code == country,
                        "{c.name} ({c.code})"
                    }
                }
            }
        }
    }
}
