//! Scénarios bout-à-bout du noyau : mots -> jetons -> automate -> résultat / erreur.
//!
//! Surtout sans flux : on classe des mots à la main puis on ajoute la fin de calcul.
//! Le dernier scénario passe par le lecteur (itérateur de jetons).

use super::automate::{Automate, Issue};
use super::calcul::Debordement;
use super::erreurs::ErreurCalcul;
use super::jetons::{classify, Classement, LecteurJetons, Tok};
use super::nombre::Nombre;

/// Évalue une expression complète ; s’arrête à la première erreur.
fn evalue<T: Nombre>(mots: &[&str], classement: Classement) -> Result<T, ErreurCalcul> {
    let mut m = Automate::<T>::new(Debordement::Enveloppe);
    let jetons = mots
        .iter()
        .map(|w| classify(w, classement))
        .chain(std::iter::once(Tok::Eoc));

    for t in jetons {
        if let Issue::Resultat(v) = m.avance(t)? {
            return Ok(v);
        }
    }
    panic!("pas de résultat pour {mots:?}");
}

fn msg<T: Nombre>(mots: &[&str]) -> String {
    match evalue::<T>(mots, Classement::Strict) {
        Ok(v) => panic!("attendu une erreur pour {mots:?}, reçu {v}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn exemples_de_base() {
    assert_eq!(evalue::<i64>(&["3", "4", "+"], Classement::Strict), Ok(7));
    assert_eq!(evalue::<i64>(&["10", "3", "%"], Classement::Strict), Ok(1));
    assert_eq!(msg::<i64>(&["5", "0", "/"]), "division by zero");
    assert_eq!(msg::<i64>(&["5", "0", "%"]), "division by zero");
}

#[test]
fn chaine_d_operations() {
    // (3 + 4) * 2 - 5 = 9
    let mots = ["3", "4", "+", "2", "*", "5", "-"];
    assert_eq!(evalue::<i64>(&mots, Classement::Strict), Ok(9));
    // négatifs
    assert_eq!(evalue::<i32>(&["-6", "4", "-"], Classement::Strict), Ok(-10));
}

#[test]
fn operateur_avant_operande() {
    let mut m = Automate::<i64>::new(Debordement::Enveloppe);
    let e = m.avance(classify("+", Classement::Strict)).unwrap_err();
    assert_eq!(e.to_string(), "expected operand 1, got operator");
    assert_eq!(m.profondeur(), 0);
    assert!(m.est_vierge());
}

#[test]
fn messages_par_etat() {
    assert_eq!(msg::<i64>(&[]), "expected operand 1, got end-of-calculation");
    assert_eq!(msg::<i64>(&["3"]), "expected operand 2, got end-of-calculation");
    assert_eq!(msg::<i64>(&["3", "+"]), "expected operand 2, got operator");
    assert_eq!(msg::<i64>(&["3", "4"]), "expected operator, got end-of-calculation");
    assert_eq!(msg::<i64>(&["3", "4", "5"]), "expected operator, got operand");
    assert_eq!(msg::<i64>(&["x"]), "expected operand 1, got invalid token 'x'");
    assert_eq!(msg::<i64>(&["1", "2.5"]), "expected operand 2, got invalid token '2.5'");
    assert_eq!(msg::<i64>(&["1", "2", "^"]), "expected operator, got invalid token '^'");
}

#[test]
fn un_operande_un_operateur_puis_fin() {
    // l’erreur sur "+" ne change pas l’état : la fin arrive encore en attente d’opérande 2,
    // drapeau "opérateur vu" toujours faux
    let mut m = Automate::<i64>::new(Debordement::Enveloppe);
    let mut erreurs = Vec::new();
    for w in ["3", "+"] {
        if let Err(e) = m.avance(classify(w, Classement::Strict)) {
            erreurs.push(e.to_string());
        }
    }
    let fin = m.avance(Tok::Eoc).unwrap_err();
    assert_eq!(erreurs, vec!["expected operand 2, got operator".to_string()]);
    assert_eq!(fin.to_string(), "expected operand 2, got end-of-calculation");
}

#[test]
fn depassement_i32() {
    assert_eq!(
        msg::<i32>(&["99999999999999999999", "1", "+"]),
        "failed to parse input '99999999999999999999': parse type value overflow"
    );
}

#[test]
fn classement_differe() {
    let d = Classement::Differe;
    assert_eq!(evalue::<f64>(&["2.5", "4", "*"], d), Ok(10.0));
    assert_eq!(evalue::<f64>(&["1e1", "3", "/"], d), Ok(10.0 / 3.0));
    assert_eq!(
        evalue::<i64>(&["2.5", "4", "*"], d),
        Err(ErreurCalcul::NonEntier("2.5".into()))
    );
    assert_eq!(
        evalue::<i64>(&["abc"], d),
        Err(ErreurCalcul::Lecture("abc".into()))
    );
    // "-" seul reste l’opérateur
    assert_eq!(evalue::<i64>(&["9", "4", "-"], d), Ok(5));
}

#[test]
fn flottants_modulo_et_division() {
    assert_eq!(evalue::<f32>(&["7", "2", "/"], Classement::Strict), Ok(3.5));
    assert_eq!(evalue::<f64>(&["7", "2", "%"], Classement::Strict), Ok(1.0));
    assert_eq!(
        evalue::<f64>(&["7", "0", "/"], Classement::Strict),
        Err(ErreurCalcul::DivisionParZero)
    );
}

#[test]
fn depuis_un_flux_de_texte() {
    let mut m = Automate::<i64>::new(Debordement::Enveloppe);
    let mut issues = Vec::new();

    for t in LecteurJetons::new("3 4 + 2 *\n".as_bytes(), Classement::Strict) {
        match m.avance(t.unwrap()) {
            Ok(Issue::Continue) => {}
            Ok(Issue::Resultat(v)) => issues.push(Ok(v)),
            Err(e) => issues.push(Err(e)),
        }
    }

    // un seul Eoc (fin du flux) : le lecteur s’arrête juste après
    assert_eq!(issues, vec![Ok(14)]);
}
