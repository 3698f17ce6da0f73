// src/noyau/automate.rs
//
// Automate d’évaluation RPN (un jeton à la fois).
//
// États :
//   AttenteOperande1 --opérande--> AttenteOperande2 --opérande--> AttenteOperateur
//   AttenteOperateur --opérateur--> AttenteOperande2   (calcul, résultat ré-empilé)
//   AttenteOperande2 --fin (si au moins un opérateur)--> Termine (résultat émis)
//
// Contrats :
// - une erreur de calcul ne modifie ni la pile ni l’état
// - pile : 0, 1 ou 2 valeurs ; toute autre arité est un défaut (panic)
// - Termine est final : il faut reset() avant de réutiliser l’automate

use tracing::debug;

use super::calcul::{calculate, Debordement};
use super::erreurs::{Attendu, ErreurCalcul, Recu};
use super::jetons::Tok;
use super::lecture::parse;
use super::nombre::Nombre;
use super::pile::Pile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    AttenteOperande1,
    AttenteOperande2,
    AttenteOperateur,
    Termine,
}

/// Ce que produit un pas d’automate réussi.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Issue<T> {
    Continue,
    Resultat(T),
}

#[derive(Debug)]
pub struct Automate<T> {
    etat: Etat,
    pile: Pile<T, 2>,
    operateur_vu: bool,
    debordement: Debordement,
}

impl<T: Nombre> Automate<T> {
    pub fn new(debordement: Debordement) -> Self {
        Self {
            etat: Etat::AttenteOperande1,
            pile: Pile::new(),
            operateur_vu: false,
            debordement,
        }
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn profondeur(&self) -> usize {
        self.pile.len()
    }

    /// Rien n’a encore été consommé depuis le dernier reset.
    pub fn est_vierge(&self) -> bool {
        self.etat == Etat::AttenteOperande1 && self.pile.is_empty()
    }

    pub fn reset(&mut self) {
        self.etat = Etat::AttenteOperande1;
        self.pile.clear();
        self.operateur_vu = false;
    }

    /// Consomme un jeton.
    ///
    /// Rend `Issue::Resultat` quand la fin de calcul arrive sur une expression complète.
    /// Panique si appelé dans l’état `Termine` (l’appelant doit `reset()`).
    pub fn avance(&mut self, tok: Tok) -> Result<Issue<T>, ErreurCalcul> {
        use Etat::*;

        let avant = self.etat;
        let issue = match (self.etat, tok) {
            (Termine, tok) => panic!("automate terminé, jeton {tok:?} reçu sans reset"),

            (AttenteOperande1, Tok::Operand(s)) => {
                self.empile(parse::<T>(&s)?);
                self.etat = AttenteOperande2;
                Issue::Continue
            }
            (AttenteOperande1, autre) => return Err(inattendu(Attendu::Operande1, autre)),

            (AttenteOperande2, Tok::Operand(s)) => {
                self.empile(parse::<T>(&s)?);
                self.etat = AttenteOperateur;
                Issue::Continue
            }
            (AttenteOperande2, Tok::Eoc) if self.operateur_vu => {
                self.etat = Termine;
                Issue::Resultat(self.emet())
            }
            (AttenteOperande2, autre) => return Err(inattendu(Attendu::Operande2, autre)),

            (AttenteOperateur, Tok::Operator(op)) => {
                let (lhs, rhs) = self.depile_deux();
                match calculate(lhs, rhs, op, self.debordement) {
                    Ok(v) => {
                        debug!(%lhs, %rhs, %op, resultat = %v, "calcul");
                        self.empile(v);
                        self.operateur_vu = true;
                        self.etat = AttenteOperande2;
                        Issue::Continue
                    }
                    Err(e) => {
                        // on remet les opérandes : l’erreur ne touche pas la pile
                        self.empile(lhs);
                        self.empile(rhs);
                        return Err(e);
                    }
                }
            }
            (AttenteOperateur, autre) => return Err(inattendu(Attendu::Operateur, autre)),
        };

        if avant != self.etat {
            debug!(de = ?avant, vers = ?self.etat, pile = self.pile.len(), "transition");
        }
        Ok(issue)
    }

    fn empile(&mut self, v: T) {
        if self.pile.push(v).is_err() {
            panic!("pile pleine : troisième valeur empilée (état {:?})", self.etat);
        }
    }

    fn depile_deux(&mut self) -> (T, T) {
        assert_eq!(self.pile.len(), 2, "deux valeurs attendues en mémoire");
        match (self.pile.pop(), self.pile.pop()) {
            (Some(rhs), Some(lhs)) => (lhs, rhs),
            _ => unreachable!("arité vérifiée juste avant"),
        }
    }

    fn emet(&mut self) -> T {
        assert_eq!(self.pile.len(), 1, "un seul résultat attendu en mémoire");
        match self.pile.pop() {
            Some(v) => v,
            None => unreachable!("arité vérifiée juste avant"),
        }
    }
}

/// Erreur "attendu X, reçu Y" pour un jeton arrivé au mauvais moment.
fn inattendu(attendu: Attendu, tok: Tok) -> ErreurCalcul {
    let recu = match tok {
        Tok::Operand(_) => Recu::Operande,
        Tok::Operator(_) => Recu::Operateur,
        Tok::Eoc => Recu::FinDeCalcul,
        Tok::Invalid(mot) => Recu::Invalide(mot),
    };
    ErreurCalcul::inattendu(attendu, recu)
}
