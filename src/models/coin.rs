// ============================================================================
// Structure : CoinRecord
// ============================================================================
// Représente une cryptomonnaie affichée dans la liste
//
// CONCEPTS RUST :
// 1. Valeur immuable : champs publics mais aucune méthode &mut self
// 2. Serde : #[serde(rename = ...)] pour garder la forme JSON "priceUsd"
// 3. Le prix reste du texte ; il n'est parsé qu'au moment de l'affichage
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::price::format_price;

/// Une cryptomonnaie de la liste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Identifiant unique dans la liste (ex: "bitcoin")
    pub id: String,

    /// Ticker court (ex: "BTC")
    pub symbol: String,

    /// Nom affiché (ex: "Bitcoin")
    pub name: String,

    /// Prix en USD, encodé en texte (ex: "67432.10")
    #[serde(rename = "priceUsd")]
    pub price_usd: String,
}

impl CoinRecord {
    /// Crée un enregistrement
    ///
    /// CONCEPT RUST : impl Into<String>
    /// - Accepte &str ou String sans .to_string() côté appelant
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        price_usd: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            price_usd: price_usd.into(),
        }
    }

    /// Prix formaté pour l'affichage (ex: "$67,432.10")
    pub fn formatted_price(&self) -> String {
        format_price(&self.price_usd)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_creation() {
        let coin = CoinRecord::new("bitcoin", "BTC", "Bitcoin", "67432.10");
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.formatted_price(), "$67,432.10");
    }

    #[test]
    fn test_formatted_price_fallback() {
        let coin = CoinRecord::new("broken", "BRK", "Broken", "n/a");
        assert_eq!(coin.formatted_price(), "$0.00");
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"id":"xrp","symbol":"XRP","name":"XRP","priceUsd":"0.62"}"#;
        let coin: CoinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(coin, CoinRecord::new("xrp", "XRP", "XRP", "0.62"));

        let value = serde_json::to_value(&coin).unwrap();
        assert_eq!(value["priceUsd"], "0.62");
        assert!(value.get("price_usd").is_none());
    }
}
