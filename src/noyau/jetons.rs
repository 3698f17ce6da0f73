// src/noyau/jetons.rs
//
// Tokenisation mot par mot.
// - un mot = suite maximale d’octets non-blancs (ASCII)
// - aucun mot n’est consommé à moitié
// - fin du flux => Tok::Eoc ; échec de lecture => io::Error (fatal)
//
// Deux classements possibles (voir Classement) :
// - Strict  : chiffres / -chiffres => Operand, opérateur seul => Operator, sinon Invalid
// - Differe : seul le test opérateur compte, le reste part en Operand
//             et c’est la lecture numérique (lecture.rs) qui validera

use std::fmt;
use std::io::{self, BufRead};

use tracing::trace;

/// Les cinq opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Percent => '%',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Texte brut ; la valeur est lue plus tard, dans le type choisi.
    Operand(String),
    Operator(Op),
    /// Fin de calcul (fin du flux, ou fin de ligne si activée).
    Eoc,
    Invalid(String),
}

/// Stratégie de classement des mots (voir l’en-tête du module).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Classement {
    #[default]
    Strict,
    Differe,
}

/// Classe un mot (non vide).
pub fn classify(mot: &str, classement: Classement) -> Tok {
    let est_chiffres = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match classement {
        Classement::Strict => {
            if est_chiffres(mot) {
                return Tok::Operand(mot.to_string());
            }
            // "-" seul échoue ici (len == 1) et tombe sur le test opérateur
            if mot.len() > 1 && mot.starts_with('-') && est_chiffres(&mot[1..]) {
                return Tok::Operand(mot.to_string());
            }
            match operateur_seul(mot) {
                Some(op) => Tok::Operator(op),
                None => Tok::Invalid(mot.to_string()),
            }
        }
        Classement::Differe => match operateur_seul(mot) {
            Some(op) => Tok::Operator(op),
            None => Tok::Operand(mot.to_string()),
        },
    }
}

fn operateur_seul(mot: &str) -> Option<Op> {
    let mut it = mot.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Op::from_char(c),
        _ => None,
    }
}

/* ------------------------ Lecteur (source de mots) ------------------------ */

/// Résultat brut d’une lecture de mot.
enum Mot {
    Texte(String),
    FinDeLigne,
    FinDeFlux,
}

/// Lit des jetons depuis une source bufferisée (stdin, fichier, &[u8]…).
pub struct LecteurJetons<R> {
    source: R,
    classement: Classement,
    lignes: bool,
    epuise: bool,
    en_echec: bool,
}

impl<R: BufRead> LecteurJetons<R> {
    pub fn new(source: R, classement: Classement) -> Self {
        Self {
            source,
            classement,
            lignes: false,
            epuise: false,
            en_echec: false,
        }
    }

    /// Si activé, un '\n' termine le calcul courant (Tok::Eoc).
    pub fn avec_lignes(mut self, lignes: bool) -> Self {
        self.lignes = lignes;
        self
    }

    /// Consomme exactement un mot et le classe.
    pub fn read_token(&mut self) -> io::Result<Tok> {
        let tok = match self.lire_mot()? {
            Mot::Texte(mot) => classify(&mot, self.classement),
            Mot::FinDeLigne | Mot::FinDeFlux => Tok::Eoc,
        };
        trace!(?tok, "jeton lu");
        Ok(tok)
    }

    /// Jette tout jusqu’au prochain '\n' inclus (reste d’une ligne en erreur).
    pub fn abandonne_ligne(&mut self) -> io::Result<()> {
        loop {
            let buf = match self.source.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                self.epuise = true;
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    self.source.consume(i + 1);
                    return Ok(());
                }
                None => {
                    let n = buf.len();
                    self.source.consume(n);
                }
            }
        }
    }

    fn lire_mot(&mut self) -> io::Result<Mot> {
        // 1) saute les blancs
        loop {
            let buf = match self.source.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                self.epuise = true;
                return Ok(Mot::FinDeFlux);
            }

            let mut n = 0;
            let mut fin_ligne = false;
            for &b in buf {
                if !b.is_ascii_whitespace() {
                    break;
                }
                n += 1;
                if self.lignes && b == b'\n' {
                    fin_ligne = true;
                    break;
                }
            }

            let reste = n < buf.len();
            self.source.consume(n);
            if fin_ligne {
                return Ok(Mot::FinDeLigne);
            }
            if reste {
                break;
            }
        }

        // 2) accumule le mot jusqu’au prochain blanc (non consommé)
        let mut octets = Vec::new();
        loop {
            let buf = match self.source.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            let n = buf
                .iter()
                .position(|b| b.is_ascii_whitespace())
                .unwrap_or(buf.len());
            octets.extend_from_slice(&buf[..n]);
            let fini = n < buf.len();
            self.source.consume(n);
            if fini {
                break;
            }
        }

        Ok(Mot::Texte(String::from_utf8_lossy(&octets).into_owned()))
    }
}

/// Itération sur les jetons : s’arrête une fois la source épuisée
/// (après le Tok::Eoc de fin de flux) ou après une erreur de lecture.
impl<R: BufRead> Iterator for LecteurJetons<R> {
    type Item = io::Result<Tok>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.epuise || self.en_echec {
            return None;
        }
        let r = self.read_token();
        self.en_echec = r.is_err();
        Some(r)
    }
}
