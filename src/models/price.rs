// ============================================================================
// PriceFormatter : affichage monétaire d'un prix texte
// ============================================================================
// Transforme un prix encodé en texte ("67432.10") en chaîne affichable
// ("$67,432.10").
//
// CONCEPTS RUST :
// 1. Option<T> + combinateurs : parse-or-default sans exception
//    - parse().ok() : Result -> Option
//    - .map(..).unwrap_or_else(..) : valeur de repli explicite
// 2. Struct Copy : le formatter est une petite valeur sans état
// 3. Fonctions pures : même entrée => même sortie, aucun effet de bord
//
// ARRONDI :
// - On s'appuie sur le formatage {:.2} de la std
// - Il arrondit la valeur binaire exacte du f64 ; une égalité exacte
//   (ex: 0.125) est arrondie au pair
// - Le groupement des milliers est appliqué APRÈS l'arrondi
//   ("999.999" => "$1,000.00")
// ============================================================================

/// Chaîne renvoyée quand le prix n'est pas un nombre valide
pub const FALLBACK_PRICE: &str = "$0.00";

/// Convention d'affichage d'un montant (symbole et séparateurs)
///
/// `PriceFormatter::default()` correspond à la convention en-US :
/// symbole `$`, groupement `,`, décimale `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormatter {
    /// Symbole monétaire placé devant le montant
    symbol: &'static str,

    /// Séparateur des groupes de trois chiffres
    grouping: char,

    /// Séparateur de la partie décimale
    decimal: char,
}

impl PriceFormatter {
    /// Convention en-US : "$1,234.56"
    pub const EN_US: PriceFormatter = PriceFormatter {
        symbol: "$",
        grouping: ',',
        decimal: '.',
    };

    /// Crée un formatter avec d'autres séparateurs
    ///
    /// Exemple : `with_separators("$", ' ', ',')` donne "$1 234,56"
    pub fn with_separators(symbol: &'static str, grouping: char, decimal: char) -> Self {
        Self {
            symbol,
            grouping,
            decimal,
        }
    }

    /// Formatte un prix texte
    ///
    /// Si le texte n'est pas un nombre fini, renvoie le zéro de la
    /// convention (pour en-US : exactement "$0.00"). Aucune erreur n'est
    /// remontée à l'appelant.
    pub fn format(&self, price_text: &str) -> String {
        parse_price(price_text)
            .map(|value| self.format_amount(value))
            .unwrap_or_else(|| self.zero())
    }

    /// Comme `format`, mais accepte une valeur absente
    pub fn format_opt(&self, price_text: Option<&str>) -> String {
        price_text
            .map(|text| self.format(text))
            .unwrap_or_else(|| self.zero())
    }

    /// Formatte un montant déjà parsé
    ///
    /// Le signe "-" est placé devant le symbole ("-$12.50"). Un montant
    /// négatif qui s'arrondit à zéro s'affiche sans signe.
    pub fn format_amount(&self, value: f64) -> String {
        let rendered = format!("{:.2}", value.abs());

        // {:.2} produit toujours un point ; le repli ne sert que par sûreté
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, "00"));

        let sign = if value < 0.0 && (int_part != "0" || frac_part != "00") {
            "-"
        } else {
            ""
        };

        format!(
            "{}{}{}{}{}",
            sign,
            self.symbol,
            group_digits(int_part, self.grouping),
            self.decimal,
            frac_part
        )
    }

    fn zero(&self) -> String {
        self.format_amount(0.0)
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Formatte un prix texte avec la convention par défaut (en-US)
///
/// ```
/// use cryptowallet::models::format_price;
///
/// assert_eq!(format_price("67432.10"), "$67,432.10");
/// assert_eq!(format_price("abc"), "$0.00");
/// ```
pub fn format_price(price_text: &str) -> String {
    PriceFormatter::EN_US.format(price_text)
}

/// Variante pour une valeur absente : `None` donne "$0.00"
pub fn format_price_opt(price_text: Option<&str>) -> String {
    PriceFormatter::EN_US.format_opt(price_text)
}

/// Parse un prix texte en f64 fini
///
/// CONCEPT RUST : Option chaining
/// - parse() échoue sur "", "abc", " 1.0" (espaces non acceptés)
/// - filter() écarte "inf" et "NaN", que parse() accepte
fn parse_price(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Insère le séparateur tous les trois chiffres en partant de la droite
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_known_values() {
        assert_eq!(format_price("67432.10"), "$67,432.10");
        assert_eq!(format_price("3546.78"), "$3,546.78");
        assert_eq!(format_price("145.45"), "$145.45");
        assert_eq!(format_price("0.62"), "$0.62");
        assert_eq!(format_price("0.45"), "$0.45");
    }

    #[test]
    fn test_format_price_fallback() {
        assert_eq!(format_price(""), FALLBACK_PRICE);
        assert_eq!(format_price("abc"), FALLBACK_PRICE);
        assert_eq!(format_price("12.3.4"), FALLBACK_PRICE);
        assert_eq!(format_price(" 1.00"), FALLBACK_PRICE);
        assert_eq!(format_price_opt(None), FALLBACK_PRICE);
    }

    #[test]
    fn test_non_finite_is_fallback() {
        assert_eq!(format_price("inf"), "$0.00");
        assert_eq!(format_price("NaN"), "$0.00");
    }

    #[test]
    fn test_format_price_opt_some() {
        assert_eq!(format_price_opt(Some("1500")), "$1,500.00");
    }

    #[test]
    fn test_two_fraction_digits_and_symbol() {
        let inputs = ["0", "1", "0.5", "12.345", "1000", "98765.4321", "1e3", ".75"];

        for input in inputs {
            let output = format_price(input);
            assert!(output.starts_with('$'), "{} -> {}", input, output);

            let (_, frac) = output.rsplit_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{} -> {}", input, output);
            assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_price("1234567.891"), "$1,234,567.89");
        assert_eq!(format_price("100"), "$100.00");
        assert_eq!(format_price("100000"), "$100,000.00");
    }

    #[test]
    fn test_grouping_after_rounding() {
        assert_eq!(format_price("999.999"), "$1,000.00");
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 0.125 et 0.375 sont des égalités exactes en binaire
        assert_eq!(format_price("0.125"), "$0.12");
        assert_eq!(format_price("0.375"), "$0.38");

        // 0.005 est un peu au-dessus de la moitié en binaire
        assert_eq!(format_price("0.005"), "$0.01");
    }

    #[test]
    fn test_accepted_spellings() {
        assert_eq!(format_price("+5"), "$5.00");
        assert_eq!(format_price("-0"), "$0.00");
        assert_eq!(format_price("infinity"), "$0.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_price("-12.5"), "-$12.50");
        assert_eq!(format_price("-0.001"), "$0.00");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(format_price("3546.78"), format_price("3546.78"));
    }

    #[test]
    fn test_custom_separators() {
        let formatter = PriceFormatter::with_separators("$", ' ', ',');
        assert_eq!(formatter.format("67432.10"), "$67 432,10");
        assert_eq!(formatter.format("oops"), "$0,00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", ','), "123,456");
    }
}
