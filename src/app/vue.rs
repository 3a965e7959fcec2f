// src/app/vue.rs
//
// Vue egui de la calculatrice scientifique.
//
// Haut : entrée + rangées de touches (actions, opérateurs, fonctions, pavé).
// Bas  : résultat (couleur d’erreur), aperçu live, panneau “Démarche”.
//
// Les touches écrivent les glyphes × ÷ √ π tels quels : le noyau les
// normalise. L’unité d’angle est lue dans l’état à chaque appel du noyau.

use eframe::egui;

use super::etat::AppCalc;

/// Motifs retirés d’un bloc par DEL (le plus long d’abord : "asin(" avant "sin(").
const MOTIFS_BACKSPACE: [&str; 10] = [
    "asin(", "acos(", "atan(", "sqrt(", "sin(", "cos(", "tan(", "log(", "pow(", "ln(",
];

const FONCTIONS: [&str; 9] = ["sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "pow"];

/// Pavé 4 colonnes : (libellé, texte inséré). "DEL" est une action.
const PAVE: [[(&str, &str); 4]; 4] = [
    [("7", "7"), ("8", "8"), ("9", "9"), ("DEL", "")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("EXP", "e")],
    [("1", "1"), ("2", "2"), ("3", "3"), (".", ".")],
    [("0", "0"), ("", ""), ("", ""), ("", "")],
];

impl AppCalc {
    /// À appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);
                Self::intercalaire(ui);
                self.ui_resultats(ui);
                Self::intercalaire(ui);
                self.ui_demarche(ui);
            });
    }

    fn intercalaire(ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3×4, 50+10%, sin(30), √9, pow(2, 10)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter n’évalue que si le champ a le focus
        if resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale (unité comprise)", Action::ResetTotal);

            ui.separator();

            let libelle = self.unite.libelle();
            self.bouton_action(
                ui,
                libelle,
                "Unité d’angle pour sin/cos/tan et leurs inverses (F2)",
                Action::BasculerUnite,
            );
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::Postfix);
            for op in ["+", "-", "×", "÷"] {
                self.bouton_insert(ui, op, op, InsertKind::Op);
            }
            self.bouton_insert(ui, "%", "%", InsertKind::Postfix);
            self.bouton_insert(ui, ",", ",", InsertKind::Postfix);

            ui.add_space(10.0);

            if ui.add_sized([64.0, 32.0], egui::Button::new("=")).clicked() {
                self.eval_via_noyau();
            }
        });

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "π", "π", InsertKind::Word);
            self.bouton_insert(ui, "e", "e", InsertKind::Word);
            self.bouton_insert(ui, "√", "√", InsertKind::Func);

            ui.separator();

            for f in FONCTIONS {
                self.bouton_insert(ui, f, &format!("{f}("), InsertKind::Func);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, texte) in rangee {
                        match libelle {
                            "" => {
                                ui.label("");
                            }
                            "DEL" => self.bouton_action(
                                ui,
                                libelle,
                                "Efface le dernier symbole",
                                Action::Backspace,
                            ),
                            _ => self.bouton_insert(ui, libelle, texte, InsertKind::Digit),
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// DEL : retire un nom de fonction entier ("asin(") ou un seul caractère.
    fn backspace_entree(&mut self) {
        retirer_espaces_finaux(&mut self.entree);

        let n = MOTIFS_BACKSPACE
            .iter()
            .find(|m| self.entree.ends_with(*m))
            .map_or(1, |m| m.chars().count());
        for _ in 0..n {
            self.entree.pop();
        }

        retirer_espaces_finaux(&mut self.entree);
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        // noyau pur et borné par LONGUEUR_MAX : rappelé à chaque frame
        let apercu = crate::noyau::evaluer_expression(&self.entree, self.unite);
        self.set_apercu(apercu);

        ui.label("Résultat :");
        if self.est_erreur {
            let couleur = ui.visuals().error_fg_color;
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.colored_label(couleur, egui::RichText::new(&self.resultat).monospace());
                });
        } else {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        }

        ui.add_space(6.0);

        ui.label(format!("Aperçu ({}) :", self.unite.libelle()));
        ui.monospace(if self.apercu.is_empty() { "—" } else { self.apercu.as_str() });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                let etape = format!("{:?}", self.demarche.etape);
                Self::champ_demarche(ui, "Étape atteinte", "demarche_etape", &etape);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    /// Cadre monospace en lecture seule, hauteur minimale en lignes.
    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, lignes: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        lignes as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);
        if !resp.clicked() {
            return;
        }

        match action {
            Action::ClearEntree => self.clear_entree(),
            Action::ClearResultats => self.clear_resultats(),
            Action::ResetTotal => self.reset_total(),
            Action::Backspace => self.backspace_entree(),
            Action::BasculerUnite => self.basculer_unite(),
        }
        self.focus_entree = true;
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str, kind: InsertKind) {
        if ui.add_sized([46.0, 28.0], egui::Button::new(label)).clicked() {
            self.inserer(texte, kind);
            self.focus_entree = true;
        }
    }

    /// Insère un morceau d’expression avec un espacement lisible.
    /// L’espacement est cosmétique : le noyau ignore les blancs.
    fn inserer(&mut self, texte: &str, kind: InsertKind) {
        let precedent = self.entree.chars().rev().find(|c| !c.is_whitespace());

        match kind {
            InsertKind::Postfix => retirer_espaces_finaux(&mut self.entree),
            InsertKind::Op => {
                retirer_espaces_finaux(&mut self.entree);
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
            }
            // "2 sin(" et "2 (" : séparés pour la lecture
            InsertKind::OpenParen | InsertKind::Func => {
                if precedent.is_some_and(|c| c.is_ascii_alphanumeric() || c == ')') {
                    self.entree.push(' ');
                }
            }
            // "2 π" mais "1e5" (EXP est un Digit)
            InsertKind::Word => {
                let colle = !self.entree.ends_with(char::is_whitespace);
                if colle && precedent.is_some_and(|c| c.is_ascii_digit() || c == ')') {
                    self.entree.push(' ');
                }
            }
            InsertKind::Digit => {}
        }

        self.entree.push_str(texte);
        if matches!(kind, InsertKind::Op) {
            self.entree.push(' ');
        }
    }

    /// Évalue l’entrée (unité courante) et dépose affichage + démarche.
    fn eval_via_noyau(&mut self) {
        let calcul = crate::noyau::calculer(&self.entree, self.unite);
        self.set_resultat(calcul.affichage, calcul.demarche);
    }
}

fn retirer_espaces_finaux(s: &mut String) {
    let n = s.trim_end().len();
    s.truncate(n);
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
    BasculerUnite,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Word,
    Func,
    Op,
    Postfix,
    OpenParen,
}
