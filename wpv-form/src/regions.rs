//! Static continent → country table backing the country picker.

pub const DEFAULT_COUNTRY: &str = "CD";
pub const DEFAULT_CONTINENT: &str = "Africa";

/// A country as listed in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, the value sent to the pageviews API.
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continent {
    pub name: &'static str,
    pub countries: &'static [Country],
}

macro_rules! countries {
    ($($code:literal => $name:literal),* $(,)?) => {
        &[$(Country { code: $code, name: $name }),*]
    };
}

pub static CONTINENTS: &[Continent] = &[
    Continent {
        name: "Africa",
        countries: countries![
            "DZ" => "Algérie", "AO" => "Angola", "BJ" => "Bénin", "BW" => "Botswana",
            "BF" => "Burkina Faso", "BI" => "Burundi", "CV" => "Cap-Vert", "CM" => "Cameroun",
            "CF" => "République centrafricaine", "TD" => "Tchad", "KM" => "Comores",
            "CG" => "Congo", "CD" => "République démocratique du Congo", "CI" => "Côte d'Ivoire",
            "DJ" => "Djibouti", "EG" => "Égypte", "GQ" => "Guinée équatoriale", "ER" => "Érythrée",
            "SZ" => "Eswatini", "ET" => "Éthiopie", "GA" => "Gabon", "GM" => "Gambie",
            "GH" => "Ghana", "GN" => "Guinée", "GW" => "Guinée-Bissau", "KE" => "Kenya",
            "LS" => "Lesotho", "LR" => "Liberia", "LY" => "Libye", "MG" => "Madagascar",
            "MW" => "Malawi", "ML" => "Mali", "MR" => "Mauritanie", "MU" => "Maurice",
            "MA" => "Maroc", "MZ" => "Mozambique", "NA" => "Namibie", "NE" => "Niger",
            "NG" => "Nigeria", "RW" => "Rwanda", "ST" => "Sao Tomé-et-Principe", "SN" => "Sénégal",
            "SC" => "Seychelles", "SL" => "Sierra Leone", "SO" => "Somalie", "ZA" => "Afrique du Sud",
            "SS" => "Soudan du Sud", "SD" => "Soudan", "TZ" => "Tanzanie", "TG" => "Togo",
            "TN" => "Tunisie", "UG" => "Ouganda", "ZM" => "Zambie", "ZW" => "Zimbabwe",
        ],
    },
    Continent {
        name: "Europe",
        countries: countries![
            "AL" => "Albanie", "AD" => "Andorre", "AT" => "Autriche", "BY" => "Biélorussie",
            "BE" => "Belgique", "BA" => "Bosnie-Herzégovine", "BG" => "Bulgarie", "HR" => "Croatie",
            "CY" => "Chypre", "CZ" => "Tchéquie", "DK" => "Danemark", "EE" => "Estonie",
            "FI" => "Finlande", "FR" => "France", "DE" => "Allemagne", "GR" => "Grèce",
            "HU" => "Hongrie", "IS" => "Islande", "IE" => "Irlande", "IT" => "Italie",
            "XK" => "Kosovo", "LV" => "Lettonie", "LI" => "Liechtenstein", "LT" => "Lituanie",
            "LU" => "Luxembourg", "MT" => "Malte", "MD" => "Moldavie", "MC" => "Monaco",
            "ME" => "Monténégro", "NL" => "Pays-Bas", "MK" => "Macédoine du Nord", "NO" => "Norvège",
            "PL" => "Pologne", "PT" => "Portugal", "RO" => "Roumanie", "RU" => "Russie",
            "SM" => "Saint-Marin", "RS" => "Serbie", "SK" => "Slovaquie", "SI" => "Slovénie",
            "ES" => "Espagne", "SE" => "Suède", "CH" => "Suisse", "UA" => "Ukraine",
            "GB" => "Royaume-Uni",
        ],
    },
    Continent {
        name: "Asia",
        countries: countries![
            "AF" => "Afghanistan", "AM" => "Arménie", "AZ" => "Azerbaïdjan", "BH" => "Bahreïn",
            "BD" => "Bangladesh", "BT" => "Bhoutan", "BN" => "Brunei", "KH" => "Cambodge",
            "CN" => "Chine", "GE" => "Géorgie", "HK" => "Hong Kong", "IN" => "Inde",
            "ID" => "Indonésie", "IR" => "Iran", "IQ" => "Irak", "IL" => "Israël",
            "JP" => "Japon", "JO" => "Jordanie", "KZ" => "Kazakhstan", "KW" => "Koweït",
            "KG" => "Kirghizistan", "LA" => "Laos", "LB" => "Liban", "MY" => "Malaisie",
            "MV" => "Maldives", "MN" => "Mongolie", "MM" => "Myanmar", "NP" => "Népal",
            "KP" => "Corée du Nord", "OM" => "Oman", "PK" => "Pakistan", "PS" => "Palestine",
            "PH" => "Philippines", "QA" => "Qatar", "SA" => "Arabie saoudite", "SG" => "Singapour",
            "KR" => "Corée du Sud", "LK" => "Sri Lanka", "SY" => "Syrie", "TW" => "Taïwan",
            "TJ" => "Tadjikistan", "TH" => "Thaïlande", "TL" => "Timor oriental", "TR" => "Turquie",
            "TM" => "Turkménistan", "AE" => "Émirats arabes unis", "UZ" => "Ouzbékistan",
            "VN" => "Viêt Nam", "YE" => "Yémen",
        ],
    },
    Continent {
        name: "North America",
        countries: countries![
            "AG" => "Antigua-et-Barbuda", "BS" => "Bahamas", "BB" => "Barbade", "BZ" => "Belize",
            "CA" => "Canada", "CR" => "Costa Rica", "CU" => "Cuba", "DM" => "Dominique",
            "DO" => "République dominicaine", "SV" => "Salvador", "GD" => "Grenade",
            "GT" => "Guatemala", "HT" => "Haïti", "HN" => "Honduras", "JM" => "Jamaïque",
            "MX" => "Mexique", "NI" => "Nicaragua", "PA" => "Panama", "PR" => "Porto Rico",
            "KN" => "Saint-Christophe-et-Niévès", "LC" => "Sainte-Lucie",
            "VC" => "Saint-Vincent-et-les-Grenadines", "TT" => "Trinité-et-Tobago",
            "US" => "États-Unis",
        ],
    },
    Continent {
        name: "South America",
        countries: countries![
            "AR" => "Argentine", "BO" => "Bolivie", "BR" => "Brésil", "CL" => "Chili",
            "CO" => "Colombie", "EC" => "Équateur", "GY" => "Guyana", "PY" => "Paraguay",
            "PE" => "Pérou", "SR" => "Suriname", "UY" => "Uruguay", "VE" => "Venezuela",
        ],
    },
    Continent {
        name: "Oceania",
        countries: countries![
            "AU" => "Australie", "FJ" => "Fidji", "KI" => "Kiribati", "MH" => "Îles Marshall",
            "FM" => "Micronésie", "NR" => "Nauru", "NZ" => "Nouvelle-Zélande", "PW" => "Palaos",
            "PG" => "Papouasie-Nouvelle-Guinée", "WS" => "Samoa", "SB" => "Îles Salomon",
            "TO" => "Tonga", "TV" => "Tuvalu", "VU" => "Vanuatu",
        ],
    },
];

/// Continent names in picker order.
pub fn continent_names() -> impl Iterator<Item = &'static str> {
    CONTINENTS.iter().map(|continent| continent.name)
}

/// Countries of a continent; empty for an unknown name.
pub fn countries_in(continent: &str) -> &'static [Country] {
    CONTINENTS
        .iter()
        .find(|c| c.name == continent)
        .map(|c| c.countries)
        .unwrap_or(&[])
}

/// Continent a country code belongs to. Codes are matched case-insensitively.
pub fn continent_of(code: &str) -> Option<&'static str> {
    CONTINENTS
        .iter()
        .find(|c| c.countries.iter().any(|country| country.code.eq_ignore_ascii_case(code)))
        .map(|c| c.name)
}

/// Table entry for a country code, matched case-insensitively.
pub fn find_country(code: &str) -> Option<&'static Country> {
    CONTINENTS
        .iter()
        .flat_map(|c| c.countries.iter())
        .find(|country| country.code.eq_ignore_ascii_case(code))
}
