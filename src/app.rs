// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état de l'écran : snapshot affiché, sélection, confirmation de quit
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Snapshot immuable : la liste n'est jamais modifiée en place,
//    elle est remplacée en bloc par apply_snapshot()
// ============================================================================

use crate::models::CoinRecord;
use crate::store::CoinSnapshot;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Liste affichée (immuable)
    pub snapshot: CoinSnapshot,

    /// Index de la ligne sélectionnée
    pub selected_index: usize,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,
}

impl App {
    /// Crée l'application avec le snapshot à afficher
    pub fn new(snapshot: CoinSnapshot) -> Self {
        Self {
            running: true,
            snapshot,
            selected_index: 0,
            confirm_quit: false,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Navigue vers le haut
    ///
    /// CONCEPT RUST : Saturating arithmetic
    /// - saturating_sub() ne descend pas en dessous de 0
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Navigue vers le bas, sans dépasser la dernière ligne
    pub fn navigate_down(&mut self) {
        let max_index = self.snapshot.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    /// Retourne la cryptomonnaie sélectionnée (None si la liste est vide)
    pub fn selected_coin(&self) -> Option<&CoinRecord> {
        self.snapshot.get(self.selected_index)
    }

    /// Remplace la liste affichée par un nouveau snapshot
    ///
    /// La sélection est ramenée dans les bornes de la nouvelle liste.
    pub fn apply_snapshot(&mut self, snapshot: CoinSnapshot) {
        self.snapshot = snapshot;
        let max_index = self.snapshot.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
    }

    /// Tick : appelé à chaque itération de la boucle
    pub fn tick(&mut self) {
        // Rien à animer : la liste est statique
    }

    /// Demande la confirmation de quitter
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CoinStore;

    fn two_coins() -> CoinSnapshot {
        CoinSnapshot::new(vec![
            CoinRecord::new("bitcoin", "BTC", "Bitcoin", "67432.10"),
            CoinRecord::new("ethereum", "ETH", "Ethereum", "3546.78"),
        ])
    }

    #[test]
    fn test_app_creation() {
        let app = App::new(CoinStore::new().display_list());
        assert!(app.is_running());
        assert_eq!(app.snapshot.len(), 5);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new(two_coins());
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_navigation() {
        let mut app = App::new(CoinStore::new().display_list());

        for _ in 0..10 {
            app.navigate_down();
        }
        assert_eq!(app.selected_index, 4);
        assert_eq!(app.selected_coin().map(|c| c.symbol.as_str()), Some("ADA"));

        app.navigate_up();
        assert_eq!(app.selected_index, 3);

        for _ in 0..10 {
            app.navigate_up();
        }
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_coin().map(|c| c.symbol.as_str()), Some("BTC"));
    }

    #[test]
    fn test_navigation_empty_list() {
        let mut app = App::new(CoinSnapshot::new(Vec::new()));
        app.navigate_down();
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_coin().is_none());
    }

    #[test]
    fn test_apply_snapshot_clamps_selection() {
        let mut app = App::new(CoinStore::new().display_list());
        app.selected_index = 4;

        app.apply_snapshot(two_coins());
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_coin().map(|c| c.id.as_str()), Some("ethereum"));
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = App::new(two_coins());
        assert!(!app.is_awaiting_quit_confirmation());

        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());

        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());
        assert!(app.is_running());
    }
}
