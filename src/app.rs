// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Boucle de session : lecteur -> automate -> vue
// - Choisir le type numérique UNE fois (générique monomorphisé par type)
//
// Politique:
// - Arret   : premier résultat ou première erreur => fin
// - Reprise : reset après chaque issue, jusqu’à la fin du flux
//             (lignes vides ignorées, reste d’une ligne fautive jeté)
//
// Erreurs:
// - ErreurCalcul => ligne "Error: ..." puis politique
// - lecture/écriture => ErreurSession, remonte jusqu’à main (fatal)

pub mod etat;
pub mod vue;

#[cfg(test)]
mod tests_session;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::noyau::{Automate, Issue, LecteurJetons, Nombre, Tok};

pub use etat::{Politique, Reglages, TypeNumerique};
use vue::Vue;

#[derive(Debug, Error)]
pub enum ErreurSession {
    #[error("failed to read standard input stream")]
    Lecture(#[source] io::Error),

    #[error("failed to write output stream")]
    Ecriture(#[source] io::Error),
}

/// Compte rendu d’une session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub resultats: usize,
    pub erreurs: usize,
}

/// Lance une session sur `source`, écrit les issues sur `sortie`.
pub fn executer<R: BufRead, W: Write>(
    reglages: &Reglages,
    source: R,
    sortie: W,
) -> Result<Bilan, ErreurSession> {
    match reglages.type_numerique {
        TypeNumerique::I8 => session::<i8, _, _>(reglages, source, sortie),
        TypeNumerique::I16 => session::<i16, _, _>(reglages, source, sortie),
        TypeNumerique::I32 => session::<i32, _, _>(reglages, source, sortie),
        TypeNumerique::I64 => session::<i64, _, _>(reglages, source, sortie),
        TypeNumerique::I128 => session::<i128, _, _>(reglages, source, sortie),
        TypeNumerique::F32 => session::<f32, _, _>(reglages, source, sortie),
        TypeNumerique::F64 => session::<f64, _, _>(reglages, source, sortie),
    }
}

fn session<T: Nombre, R: BufRead, W: Write>(
    reglages: &Reglages,
    source: R,
    sortie: W,
) -> Result<Bilan, ErreurSession> {
    let mut lecteur = LecteurJetons::new(source, reglages.classement).avec_lignes(reglages.lignes);
    let mut automate = Automate::<T>::new(reglages.debordement);
    let mut vue = Vue::new(sortie);
    let mut bilan = Bilan::default();

    info!(
        type_numerique = T::NOM,
        politique = ?reglages.politique,
        classement = ?reglages.classement,
        "session ouverte"
    );

    // l’itérateur s’arrête de lui-même après le Eoc de fin de flux
    while let Some(tok) = lecteur.next() {
        let tok = tok.map_err(ErreurSession::Lecture)?;
        let fin_de_calcul = tok == Tok::Eoc;

        // Reprise : fin (de flux ou de ligne vide) sur un automate vierge => rien à calculer
        if reglages.politique == Politique::Reprise && fin_de_calcul && automate.est_vierge() {
            continue;
        }

        match automate.avance(tok) {
            Ok(Issue::Continue) => continue,
            Ok(Issue::Resultat(v)) => {
                debug!(resultat = %v, "résultat");
                vue.resultat(v).map_err(ErreurSession::Ecriture)?;
                bilan.resultats += 1;
            }
            Err(e) => {
                warn!(
                    erreur = %e,
                    etat = ?automate.etat(),
                    pile = automate.profondeur(),
                    "erreur de calcul"
                );
                vue.erreur(&e).map_err(ErreurSession::Ecriture)?;
                bilan.erreurs += 1;

                // le reste de la ligne fautive ne forme pas un nouveau calcul
                if reglages.politique == Politique::Reprise && reglages.lignes && !fin_de_calcul {
                    lecteur.abandonne_ligne().map_err(ErreurSession::Lecture)?;
                }
            }
        }

        match reglages.politique {
            Politique::Arret => break,
            Politique::Reprise => automate.reset(),
        }
    }

    info!(resultats = bilan.resultats, erreurs = bilan.erreurs, "session close");
    Ok(bilan)
}
