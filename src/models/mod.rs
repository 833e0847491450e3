// ============================================================================
// Module : models
// ============================================================================
// Structures de données de l'application et formatage des prix
// ============================================================================

pub mod coin;  // Enregistrement CoinRecord
pub mod price; // Formatage monétaire

// Re-export des éléments principaux
// On peut faire : use cryptowallet::models::CoinRecord;
pub use coin::CoinRecord;
pub use price::{format_price, format_price_opt, PriceFormatter, FALLBACK_PRICE};
