// ============================================================================
// Crypto Wallet - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;    // État de l'écran
pub mod models; // Structures de données et formatage des prix
pub mod store;  // Liste fixe et snapshots
pub mod ui;     // Interface utilisateur
