//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du solveur (équation, racines, forme réduite, erreur,
//! démarche) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats (version UI) :
//! - Aucune résolution ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : longueur d’entrée bornée.

/// Garde-fou : équations courtes seulement (anti-abus / anti-gel).
pub const LONGUEUR_MAX: usize = 512;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub table_brute: String,
    pub canonique: String,
    pub discriminant: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppSolveur {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub racines: String,      // racines triées (texte)
    pub reduite: String,      // forme réduite
    pub degre: String,        // 0, 1 ou 2
    pub cas: String,          // phrase du cas (discriminant, any/no…)
    pub erreur: String,       // message d’erreur (si parsing/résolution échoue)
    pub resultat_dispo: bool, // false tant que rien n’a été résolu

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub detaille: bool, // démarche détaillée (verbose)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppSolveur {
    fn default() -> Self {
        Self {
            entree: String::new(),
            racines: String::new(),
            reduite: String::new(),
            degre: String::new(),
            cas: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            detaille: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppSolveur {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + démarche repliée).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.detaille = false;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.racines.clear();
        self.reduite.clear();
        self.degre.clear();
        self.cas.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On coupe les résultats : ils ne correspondent plus à l’entrée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        racines: impl Into<String>,
        reduite: impl Into<String>,
        degre: impl Into<String>,
        cas: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.racines = racines.into();
        self.reduite = reduite.into();
        self.degre = degre.into();
        self.cas = cas.into();
        self.demarche = demarche;
        self.resultat_dispo = true;
        self.focus_entree = true;
    }

    /// Démarche détaillée on/off.
    pub fn set_detaille(&mut self, detaille: bool) {
        self.detaille = detaille;
        self.focus_entree = true;
    }

    /// Ajout depuis un bouton : refusé au-delà de LONGUEUR_MAX.
    pub fn inserer(&mut self, texte: &str) {
        if self.entree.chars().count() + texte.chars().count() > LONGUEUR_MAX {
            return;
        }
        self.entree.push_str(texte);
        self.focus_entree = true;
    }
}
