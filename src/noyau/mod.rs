//! Noyau RPN
//!
//! Organisation interne :
//! - pile.rs     : pile bornée (2 cases pour l’automate)
//! - jetons.rs   : lecture mot par mot + classement en jetons
//! - nombre.rs   : type numérique (entiers / flottants) choisi à la construction
//! - lecture.rs  : texte d’opérande -> valeur (via rationnel exact)
//! - calcul.rs   : + - * / %
//! - automate.rs : machine à états qui enchaîne le tout
//! - erreurs.rs  : erreurs de calcul (côté utilisateur)

pub mod automate;
pub mod calcul;
pub mod erreurs;
pub mod jetons;
pub mod lecture;
pub mod nombre;
pub mod pile;

#[cfg(test)]
mod tests_automate;

// API publique minimale
pub use automate::{Automate, Issue};
pub use calcul::Debordement;
pub use erreurs::ErreurCalcul;
pub use jetons::{Classement, LecteurJetons, Tok};
pub use nombre::Nombre;
