//! Sessions complètes sur flux mémoire : texte en entrée, transcription en sortie.

use pretty_assertions::assert_eq;

use super::{executer, Bilan, ErreurSession, Politique, Reglages, TypeNumerique};
use crate::noyau::test_utils::init_test_logging;
use crate::noyau::{Classement, Debordement};

fn transcrit(reglages: &Reglages, entree: &str) -> (String, Bilan) {
    init_test_logging();
    let mut out = Vec::new();
    let bilan = executer(reglages, entree.as_bytes(), &mut out)
        .unwrap_or_else(|e| panic!("session en échec: {e}"));
    (String::from_utf8(out).unwrap(), bilan)
}

fn sortie(reglages: &Reglages, entree: &str) -> String {
    transcrit(reglages, entree).0
}

#[test]
fn calcul_simple_jusqu_a_la_fin_du_flux() {
    let r = Reglages::default();
    assert_eq!(sortie(&r, "3 4 +"), "7\n");
    assert_eq!(sortie(&r, "10 3 %\n"), "1\n");
    assert_eq!(sortie(&r, "  2\n3\t*  4 -  "), "2\n");
}

#[test]
fn erreurs_en_politique_arret() {
    let r = Reglages::default();
    assert_eq!(sortie(&r, "5 0 /"), "Error: division by zero\n");
    assert_eq!(sortie(&r, "+ 3 4"), "Error: expected operand 1, got operator\n");
    assert_eq!(sortie(&r, ""), "Error: expected operand 1, got end-of-calculation\n");
    assert_eq!(sortie(&r, "3 +"), "Error: expected operand 2, got operator\n");
    assert_eq!(
        sortie(&r, "3 4 x"),
        "Error: expected operator, got invalid token 'x'\n"
    );
}

#[test]
fn arret_ignore_la_suite() {
    let r = Reglages::default();
    let (out, bilan) = transcrit(&r, "5 0 / 1 2 +");
    assert_eq!(out, "Error: division by zero\n");
    assert_eq!(bilan, Bilan { resultats: 0, erreurs: 1 });
}

#[test]
fn depassement_sur_i32() {
    let r = Reglages {
        type_numerique: TypeNumerique::I32,
        ..Reglages::default()
    };
    assert_eq!(
        sortie(&r, "99999999999999999999 1 +"),
        "Error: failed to parse input '99999999999999999999': parse type value overflow\n"
    );
    // même texte en i128 : ça passe
    let r = Reglages {
        type_numerique: TypeNumerique::I128,
        ..r
    };
    assert_eq!(sortie(&r, "99999999999999999999 1 +"), "100000000000000000000\n");
}

#[test]
fn flottants_et_classement_differe() {
    let r = Reglages {
        type_numerique: TypeNumerique::F64,
        classement: Classement::Differe,
        ..Reglages::default()
    };
    assert_eq!(sortie(&r, "2.5 4 * 1.5 -"), "8.5\n");
    assert_eq!(sortie(&r, "2.5 abc +"), "Error: failed to parse input 'abc'\n");

    let r = Reglages {
        type_numerique: TypeNumerique::I64,
        ..r
    };
    assert_eq!(
        sortie(&r, "2.5 4 *"),
        "Error: failed to parse input '2.5': invalid cross-type parse\n"
    );
}

#[test]
fn debordement_verifie() {
    let r = Reglages {
        type_numerique: TypeNumerique::I8,
        debordement: Debordement::Verifie,
        ..Reglages::default()
    };
    assert_eq!(sortie(&r, "100 100 +"), "Error: integer overflow\n");

    let r = Reglages {
        debordement: Debordement::Enveloppe,
        ..r
    };
    assert_eq!(sortie(&r, "100 100 +"), "-56\n");
}

#[test]
fn reprise_ligne_par_ligne() {
    let r = Reglages::interactif();
    let entree = "3 4 +\n\n5 0 /\n10 3 % \n+ 1 2\n6 7 *\n";
    let (out, bilan) = transcrit(&r, entree);
    assert_eq!(
        out,
        "7\n\
         Error: division by zero\n\
         1\n\
         Error: expected operand 1, got operator\n\
         42\n"
    );
    assert_eq!(bilan, Bilan { resultats: 3, erreurs: 2 });
}

#[test]
fn reprise_sans_fin_de_ligne_finale() {
    let r = Reglages::interactif();
    assert_eq!(sortie(&r, "1 2 +\n2 2 *"), "3\n4\n");
    assert_eq!(sortie(&r, ""), "");
    assert_eq!(sortie(&r, "1 2\n"), "Error: expected operator, got end-of-calculation\n");
}

#[test]
fn reprise_sur_un_seul_flux() {
    // sans --lignes : seule la fin du flux termine un calcul
    let r = Reglages {
        politique: Politique::Reprise,
        ..Reglages::default()
    };
    let (out, bilan) = transcrit(&r, "3 + 4 5 +");
    assert_eq!(out, "Error: expected operand 2, got operator\n9\n");
    assert_eq!(bilan, Bilan { resultats: 1, erreurs: 1 });
}

#[test]
fn lecture_en_echec_est_fatale() {
    struct Casse;
    impl std::io::Read for Casse {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
        }
    }

    let mut out = Vec::new();
    let e = executer(
        &Reglages::default(),
        std::io::BufReader::new(Casse),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(e, ErreurSession::Lecture(_)));
    assert_eq!(e.to_string(), "failed to read standard input stream");
    assert!(out.is_empty());
}
