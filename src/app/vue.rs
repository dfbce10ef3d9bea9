// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppSolveur (etat.rs) pour natif + wasm
// - Clavier : Enter résout, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé limité à l’alphabet accepté (chiffres, '.', + - * / ^, '=', X)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;
use log::{info, warn};

use solveur_qpur::noyau::eval::DemarcheNoyau;
use solveur_qpur::noyau::resoudre_equation;

use super::etat::{AppSolveur, Demarche};

impl AppSolveur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Solveur Q-pur");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                if self.detaille {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    self.ui_demarche(ui);
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Équation :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0")
                .id_source("entree_edit")
                .char_limit(super::etat::LONGUEUR_MAX)
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.resoudre_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut detaille = self.detaille;
            if ui
                .checkbox(&mut detaille, "Démarche détaillée")
                .on_hover_text("Affiche jetons, table brute, forme canonique, discriminant")
                .changed()
            {
                self.set_detaille(detaille);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.separator();

            self.bouton_insert(ui, "X", InsertKind::Variable);
            self.bouton_insert(ui, "=", InsertKind::Op);

            ui.add_space(10.0);

            let go = ui.add_sized([96.0, 32.0], egui::Button::new("Résoudre"));
            if go.clicked() {
                self.resoudre_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_qpur")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, InsertKind::Chiffre);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Chiffre);
                self.bouton_insert(ui, ".", InsertKind::Chiffre);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();
            });
    }

    /// Retire le dernier symbole (et les espaces qui l’entourent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        if !self.resultat_dispo {
            ui.monospace("—");
            return;
        }

        ui.label("Forme réduite :");
        Self::champ_monospace(ui, "reduite_out", &self.reduite, 1);

        ui.add_space(6.0);
        ui.label(format!("Degré : {}", self.degre));
        ui.label(&self.cas);

        ui.add_space(6.0);
        ui.label("Racines :");
        Self::champ_monospace(ui, "racines_out", &self.racines, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(
                    ui,
                    "Table brute",
                    "demarche_table",
                    &self.demarche.table_brute,
                );
                Self::champ_demarche(
                    ui,
                    "Forme canonique",
                    "demarche_canonique",
                    &self.demarche.canonique,
                );
                Self::champ_demarche(
                    ui,
                    "Discriminant",
                    "demarche_discriminant",
                    &self.demarche.discriminant,
                );
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                // opérateurs et '=' : entourés d’espaces
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.inserer(label);
                self.entree.push(' ');
            }
            InsertKind::Chiffre | InsertKind::Variable => self.inserer(label),
        }
    }

    /// Résout via le noyau, puis dépose racines/forme réduite/démarche dans l’état UI.
    fn resoudre_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match resoudre_equation(s) {
            Ok((solution, d)) => {
                info!("{s:?} -> {}", d.racines);
                let cas = d.cas.clone();
                let (racines, reduite, degre, d_ui) = demarche_ui(d);
                let cas = match solution.discriminant {
                    Some(delta) => format!("{cas} (Δ = {delta:?})"),
                    None => cas,
                };
                self.set_resultats(racines, reduite, degre, cas, d_ui);
            }
            Err(e) => {
                warn!("{s:?} refusée : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

/// Sépare la démarche du noyau : sorties principales + panneau.
fn demarche_ui(d: DemarcheNoyau) -> (String, String, String, Demarche) {
    let panneau = Demarche {
        jetons: d.jetons,
        table_brute: d.table_brute,
        canonique: d.canonique,
        discriminant: d.discriminant,
        note: d.note,
    };
    (d.racines, d.reduite, d.degre, panneau)
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Variable,
    Op,
}
