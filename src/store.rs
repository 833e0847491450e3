// ============================================================================
// Module : store
// ============================================================================
// Source des données affichées : une liste fixe de cinq cryptomonnaies
//
// CONCEPTS RUST :
// 1. Arc<[T]> : slice partagée en lecture seule
//    - Cloner un snapshot ne copie pas les enregistrements
//    - Personne ne peut modifier la liste une fois construite
// 2. Snapshot explicite : l'UI reçoit une valeur, pas un état observé
//    - Une mise à jour = un nouveau snapshot passé à App::apply_snapshot()
// ============================================================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::CoinRecord;

/// Jeu de données par défaut : (id, symbol, name, priceUsd)
const DEFAULT_COINS: [(&str, &str, &str, &str); 5] = [
    ("bitcoin", "BTC", "Bitcoin", "67432.10"),
    ("ethereum", "ETH", "Ethereum", "3546.78"),
    ("solana", "SOL", "Solana", "145.45"),
    ("xrp", "XRP", "XRP", "0.62"),
    ("cardano", "ADA", "Cardano", "0.45"),
];

// ============================================================================
// CoinSnapshot
// ============================================================================

/// Vue immuable et ordonnée de la liste affichée
#[derive(Debug, Clone)]
pub struct CoinSnapshot {
    coins: Arc<[CoinRecord]>,
    taken_at: DateTime<Utc>,
}

impl CoinSnapshot {
    /// Crée un snapshot à partir d'une liste ordonnée
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        Self {
            coins: Arc::from(coins),
            taken_at: Utc::now(),
        }
    }

    /// Tous les enregistrements, dans l'ordre d'insertion
    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CoinRecord> {
        self.coins.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoinRecord> {
        self.coins.iter()
    }

    /// Instant (UTC) où le snapshot a été pris
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

// ============================================================================
// CoinStore
// ============================================================================

/// Détient la liste fixe et produit des snapshots
#[derive(Debug, Clone)]
pub struct CoinStore {
    coins: Arc<[CoinRecord]>,
}

impl CoinStore {
    /// Crée le store avec les cinq cryptomonnaies par défaut
    pub fn new() -> Self {
        let coins = DEFAULT_COINS
            .iter()
            .map(|&(id, symbol, name, price)| CoinRecord::new(id, symbol, name, price))
            .collect();

        Self::with_coins(coins)
    }

    /// Crée un store avec une autre liste (l'unicité des id n'est pas vérifiée)
    pub fn with_coins(coins: Vec<CoinRecord>) -> Self {
        Self {
            coins: Arc::from(coins),
        }
    }

    /// Retourne la liste à afficher, dans son ordre d'origine
    pub fn display_list(&self) -> CoinSnapshot {
        CoinSnapshot {
            coins: Arc::clone(&self.coins),
            taken_at: Utc::now(),
        }
    }

    /// Point d'accroche pour un futur chargement
    ///
    /// Les données sont statiques : aucune I/O, ne bloque jamais et ne
    /// modifie pas la liste.
    pub fn fetch(&mut self) {
        debug!(coins = self.coins.len(), "Fetch requested, static dataset kept as is");
    }
}

impl Default for CoinStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
