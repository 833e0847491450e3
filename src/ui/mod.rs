// ============================================================================
// Module : ui
// ============================================================================
// Gère l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod coin_list; // Rendu de la liste des cryptomonnaies
pub mod events;    // Gestion des événements clavier

// Re-exports pour simplifier les imports
pub use coin_list::render;
pub use events::{Event, EventHandler};
