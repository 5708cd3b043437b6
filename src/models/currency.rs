use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::models::{Amount, HasAliases, HasName};
use crate::{Error, List};

/// Currency representation
///
/// A currency is identified by its ISO 4217 code and may have aliases such as its symbol. Two
/// currencies are the same when their codes are, regardless of case:
///
/// # Examples
/// ```rust
/// use budgetbuddy::models::{currencies, Currency};
///
/// let list = currencies().unwrap();
/// assert_eq!(list.get("usd").unwrap().get_code(), "USD");
/// assert_eq!(list.get("$").unwrap().as_ref(), list.get("USD").unwrap().as_ref());
/// assert_eq!(list.get("€").unwrap().get_code(), "EUR");
/// assert!(list.get("abc").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    name: String,
    aliases: HashSet<String>,
}

/// ISO 4217 code, English name and the symbols accepted as aliases
const ISO_4217: &[(&str, &str, &[&str])] = &[
    ("AED", "UAE Dirham", &[]),
    ("AFN", "Afghani", &["؋"]),
    ("ALL", "Lek", &[]),
    ("AMD", "Armenian Dram", &["֏"]),
    ("ANG", "Netherlands Antillean Guilder", &[]),
    ("AOA", "Kwanza", &[]),
    ("ARS", "Argentine Peso", &[]),
    ("AUD", "Australian Dollar", &["A$"]),
    ("AWG", "Aruban Florin", &[]),
    ("AZN", "Azerbaijan Manat", &["₼"]),
    ("BAM", "Convertible Mark", &[]),
    ("BBD", "Barbados Dollar", &[]),
    ("BDT", "Taka", &["৳"]),
    ("BGN", "Bulgarian Lev", &[]),
    ("BHD", "Bahraini Dinar", &[]),
    ("BIF", "Burundi Franc", &[]),
    ("BMD", "Bermudian Dollar", &[]),
    ("BND", "Brunei Dollar", &["B$"]),
    ("BOB", "Boliviano", &[]),
    ("BOV", "Mvdol", &[]),
    ("BRL", "Brazilian Real", &["R$"]),
    ("BSD", "Bahamian Dollar", &[]),
    ("BTN", "Ngultrum", &[]),
    ("BWP", "Pula", &[]),
    ("BYN", "Belarusian Ruble", &[]),
    ("BZD", "Belize Dollar", &[]),
    ("CAD", "Canadian Dollar", &["C$"]),
    ("CDF", "Congolese Franc", &[]),
    ("CHE", "WIR Euro", &[]),
    ("CHF", "Swiss Franc", &[]),
    ("CHW", "WIR Franc", &[]),
    ("CLF", "Unidad de Fomento", &[]),
    ("CLP", "Chilean Peso", &[]),
    ("CNY", "Yuan Renminbi", &["CN¥"]),
    ("COP", "Colombian Peso", &[]),
    ("COU", "Unidad de Valor Real", &[]),
    ("CRC", "Costa Rican Colon", &["₡"]),
    ("CUC", "Peso Convertible", &[]),
    ("CUP", "Cuban Peso", &[]),
    ("CVE", "Cabo Verde Escudo", &[]),
    ("CZK", "Czech Koruna", &["Kč"]),
    ("DJF", "Djibouti Franc", &[]),
    ("DKK", "Danish Krone", &[]),
    ("DOP", "Dominican Peso", &[]),
    ("DZD", "Algerian Dinar", &[]),
    ("EGP", "Egyptian Pound", &[]),
    ("ERN", "Nakfa", &[]),
    ("ETB", "Ethiopian Birr", &[]),
    ("EUR", "Euro", &["€"]),
    ("FJD", "Fiji Dollar", &[]),
    ("FKP", "Falkland Islands Pound", &[]),
    ("GBP", "Pound Sterling", &["£"]),
    ("GEL", "Lari", &["₾"]),
    ("GHS", "Ghana Cedi", &["₵"]),
    ("GIP", "Gibraltar Pound", &[]),
    ("GMD", "Dalasi", &[]),
    ("GNF", "Guinean Franc", &[]),
    ("GTQ", "Quetzal", &[]),
    ("GYD", "Guyana Dollar", &[]),
    ("HKD", "Hong Kong Dollar", &["HK$"]),
    ("HNL", "Lempira", &[]),
    ("HTG", "Gourde", &[]),
    ("HUF", "Forint", &["Ft"]),
    ("IDR", "Rupiah", &["Rp"]),
    ("ILS", "New Israeli Sheqel", &["₪"]),
    ("INR", "Indian Rupee", &["₹"]),
    ("IQD", "Iraqi Dinar", &[]),
    ("IRR", "Iranian Rial", &[]),
    ("ISK", "Iceland Krona", &[]),
    ("JMD", "Jamaican Dollar", &[]),
    ("JOD", "Jordanian Dinar", &[]),
    ("JPY", "Yen", &["¥"]),
    ("KES", "Kenyan Shilling", &[]),
    ("KGS", "Som", &[]),
    ("KHR", "Riel", &["៛"]),
    ("KMF", "Comorian Franc", &[]),
    ("KPW", "North Korean Won", &[]),
    ("KRW", "Won", &["₩"]),
    ("KWD", "Kuwaiti Dinar", &[]),
    ("KYD", "Cayman Islands Dollar", &[]),
    ("KZT", "Tenge", &["₸"]),
    ("LAK", "Lao Kip", &["₭"]),
    ("LBP", "Lebanese Pound", &[]),
    ("LKR", "Sri Lanka Rupee", &[]),
    ("LRD", "Liberian Dollar", &[]),
    ("LSL", "Loti", &[]),
    ("LYD", "Libyan Dinar", &[]),
    ("MAD", "Moroccan Dirham", &[]),
    ("MDL", "Moldovan Leu", &[]),
    ("MGA", "Malagasy Ariary", &[]),
    ("MKD", "Denar", &[]),
    ("MMK", "Kyat", &[]),
    ("MNT", "Tugrik", &["₮"]),
    ("MOP", "Pataca", &[]),
    ("MRU", "Ouguiya", &[]),
    ("MUR", "Mauritius Rupee", &[]),
    ("MVR", "Rufiyaa", &[]),
    ("MWK", "Malawi Kwacha", &[]),
    ("MXN", "Mexican Peso", &["MX$"]),
    ("MXV", "Mexican Unidad de Inversion", &[]),
    ("MYR", "Malaysian Ringgit", &["RM"]),
    ("MZN", "Mozambique Metical", &[]),
    ("NAD", "Namibia Dollar", &[]),
    ("NGN", "Naira", &["₦"]),
    ("NIO", "Cordoba Oro", &[]),
    ("NOK", "Norwegian Krone", &[]),
    ("NPR", "Nepalese Rupee", &[]),
    ("NZD", "New Zealand Dollar", &["NZ$"]),
    ("OMR", "Rial Omani", &[]),
    ("PAB", "Balboa", &[]),
    ("PEN", "Sol", &[]),
    ("PGK", "Kina", &[]),
    ("PHP", "Philippine Peso", &["₱"]),
    ("PKR", "Pakistan Rupee", &[]),
    ("PLN", "Zloty", &["zł"]),
    ("PYG", "Guarani", &["₲"]),
    ("QAR", "Qatari Rial", &[]),
    ("RON", "Romanian Leu", &[]),
    ("RSD", "Serbian Dinar", &[]),
    ("RUB", "Russian Ruble", &["₽"]),
    ("RWF", "Rwanda Franc", &[]),
    ("SAR", "Saudi Riyal", &[]),
    ("SBD", "Solomon Islands Dollar", &[]),
    ("SCR", "Seychelles Rupee", &[]),
    ("SDG", "Sudanese Pound", &[]),
    ("SEK", "Swedish Krona", &[]),
    ("SGD", "Singapore Dollar", &["S$"]),
    ("SHP", "Saint Helena Pound", &[]),
    ("SLE", "Leone", &[]),
    ("SLL", "Leone (old)", &[]),
    ("SOS", "Somali Shilling", &[]),
    ("SRD", "Surinam Dollar", &[]),
    ("SSP", "South Sudanese Pound", &[]),
    ("STN", "Dobra", &[]),
    ("SVC", "El Salvador Colon", &[]),
    ("SYP", "Syrian Pound", &[]),
    ("SZL", "Lilangeni", &[]),
    ("THB", "Baht", &["฿"]),
    ("TJS", "Somoni", &[]),
    ("TMT", "Turkmenistan New Manat", &[]),
    ("TND", "Tunisian Dinar", &[]),
    ("TOP", "Pa'anga", &[]),
    ("TRY", "Turkish Lira", &["₺"]),
    ("TTD", "Trinidad and Tobago Dollar", &[]),
    ("TWD", "New Taiwan Dollar", &["NT$"]),
    ("TZS", "Tanzanian Shilling", &[]),
    ("UAH", "Hryvnia", &["₴"]),
    ("UGX", "Uganda Shilling", &[]),
    ("USD", "US Dollar", &["$", "US$"]),
    ("USN", "US Dollar (Next day)", &[]),
    ("UYI", "Uruguay Peso en Unidades Indexadas", &[]),
    ("UYU", "Peso Uruguayo", &[]),
    ("UYW", "Unidad Previsional", &[]),
    ("UZS", "Uzbekistan Sum", &[]),
    ("VED", "Bolivar Soberano (VED)", &[]),
    ("VES", "Bolivar Soberano", &[]),
    ("VND", "Dong", &["₫"]),
    ("VUV", "Vatu", &[]),
    ("WST", "Tala", &[]),
    ("XAF", "CFA Franc BEAC", &[]),
    ("XAG", "Silver", &[]),
    ("XAU", "Gold", &[]),
    ("XBA", "Bond Markets Unit European Composite Unit", &[]),
    ("XBB", "Bond Markets Unit European Monetary Unit", &[]),
    ("XBC", "Bond Markets Unit European Unit of Account 9", &[]),
    ("XBD", "Bond Markets Unit European Unit of Account 17", &[]),
    ("XCD", "East Caribbean Dollar", &["EC$"]),
    ("XDR", "SDR (Special Drawing Right)", &[]),
    ("XOF", "CFA Franc BCEAO", &[]),
    ("XPD", "Palladium", &[]),
    ("XPF", "CFP Franc", &[]),
    ("XPT", "Platinum", &[]),
    ("XSU", "Sucre", &[]),
    ("XTS", "Codes specifically reserved for testing purposes", &[]),
    ("XUA", "ADB Unit of Account", &[]),
    ("XXX", "No currency", &[]),
    ("YER", "Yemeni Rial", &[]),
    ("ZAR", "Rand", &[]),
    ("ZMW", "Zambian Kwacha", &[]),
    ("ZWL", "Zimbabwe Dollar", &[]),
];

/// Units of each currency one US dollar buys
const USD_RATES: &[(&str, &str)] = &[
    ("AUD", "1.52"),
    ("CAD", "1.36"),
    ("CHF", "0.88"),
    ("CNY", "7.24"),
    ("EUR", "0.92"),
    ("GBP", "0.79"),
    ("HKD", "7.82"),
    ("IDR", "15600"),
    ("INR", "83.3"),
    ("JPY", "151.5"),
    ("KRW", "1350"),
    ("MYR", "4.73"),
    ("NZD", "1.66"),
    ("PHP", "56.2"),
    ("SGD", "1.35"),
    ("THB", "36.5"),
    ("TWD", "32.0"),
    ("USD", "1"),
    ("VND", "24700"),
];

impl Currency {
    pub fn new(code: &str, name: &str) -> Self {
        Currency {
            code: code.to_uppercase(),
            name: name.to_string(),
            aliases: HashSet::new(),
        }
    }
    pub fn get_code(&self) -> &str {
        self.code.as_str()
    }
    pub fn get_full_name(&self) -> &str {
        self.name.as_str()
    }
    pub fn set_aliases(&mut self, aliases: HashSet<String>) {
        self.aliases = aliases;
    }
}

/// Every currency the interpreter knows about, symbols included
pub fn currencies() -> Result<List<Currency>, Error> {
    let mut list = List::new();
    for (code, name, symbols) in ISO_4217 {
        let mut currency = Currency::new(code, name);
        currency.set_aliases(symbols.iter().map(|x| x.to_string()).collect());
        list.insert(currency)?;
    }
    Ok(list)
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl HasName for Currency {
    fn get_name(&self) -> &str {
        self.code.as_str()
    }
}

impl HasAliases for Currency {
    fn get_aliases(&self) -> &HashSet<String> {
        &self.aliases
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.to_uppercase().hash(state);
    }
}

/// Converts amounts between currencies with a fixed table of exchange rates
#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter;

impl CurrencyConverter {
    pub fn new() -> Self {
        CurrencyConverter
    }

    /// Units of `currency` per US dollar
    pub fn usd_rate(&self, currency: &Currency) -> Option<Amount> {
        USD_RATES
            .iter()
            .find(|(code, _)| currency.get_code() == *code)
            .and_then(|(_, rate)| rate.parse::<Amount>().ok())
    }

    pub fn convert(&self, amount: &Amount, from: &Currency, to: &Currency) -> Result<Amount, Error> {
        if from == to {
            return Ok(amount.clone());
        }
        let from_rate = self.usd_rate(from).ok_or_else(|| no_rate(from))?;
        let to_rate = self.usd_rate(to).ok_or_else(|| no_rate(to))?;
        Ok(amount.clone() / from_rate.as_rational() * to_rate.as_rational())
    }
}

fn no_rate(currency: &Currency) -> Error {
    Error::new(format!("No exchange rate available for {}", currency).as_str())
}
