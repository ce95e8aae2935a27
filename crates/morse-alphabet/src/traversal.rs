use crate::letter::Letter;
use crate::symbol::Symbol;
use crate::trie_trait::{NodeId, SymbolTrie};

/// Wynik dopasowania sekwencji symboli w drzewie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// Cała sekwencja przeszła po krawędziach i węzeł końcowy niesie literę.
    ExactMatch,
    /// Cała sekwencja przeszła, ale węzeł końcowy nie niesie litery.
    SequenceIsAPrefix,
    /// Zabrakło krawędzi dla symbolu na pozycji `index`.
    NoMatch,
}

/// Szczegółowy wynik operacji `perfect_match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub kind: MatchKind,
    /// Liczba dopasowanych symboli.
    pub index: usize,
    /// Ostatni osiągnięty węzeł.
    pub node: NodeId,
}

/// Wynik przejścia pobłażliwego (`lenient_walk`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkResult {
    pub node: NodeId,
    pub letter: Option<Letter>,
    /// Pozycje symboli, dla których nie było krawędzi (zostały pominięte).
    pub unmatched: Vec<usize>,
}

/// Operacje dopasowania sekwencji w drzewie symboli.
pub struct TrieTraversal<'a, T: SymbolTrie + ?Sized> {
    trie: &'a T,
}

impl<'a, T: SymbolTrie + ?Sized> TrieTraversal<'a, T> {
    pub fn new(trie: &'a T) -> Self {
        TrieTraversal { trie }
    }

    /// Dopasowanie ścisłe: zatrzymuje się na pierwszym symbolu bez krawędzi.
    pub fn perfect_match(&self, sequence: &[Symbol]) -> MatchResult {
        let mut node = self.trie.root();
        for (i, &symbol) in sequence.iter().enumerate() {
            match self.trie.child(node, symbol) {
                Some(next) => node = next,
                None => {
                    return MatchResult { kind: MatchKind::NoMatch, index: i, node };
                }
            }
        }

        let kind = if self.trie.letter(node).is_some() {
            MatchKind::ExactMatch
        } else {
            // Obejmuje też pustą sekwencję: korzeń nie niesie litery.
            MatchKind::SequenceIsAPrefix
        };
        MatchResult { kind, index: sequence.len(), node }
    }

    /// Przejście pobłażliwe: brak krawędzi to pętla w miejscu.
    ///
    /// Symbol bez krawędzi jest ignorowany, a reszta sekwencji jest
    /// konsumowana od bieżącego węzła. Przejście zawsze kończy się po
    /// ostatnim symbolu, niezależnie od tego, czy węzeł niesie literę.
    pub fn lenient_walk<I>(&self, sequence: I) -> WalkResult
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut node = self.trie.root();
        let mut unmatched = Vec::new();
        for (i, symbol) in sequence.into_iter().enumerate() {
            match self.trie.child(node, symbol) {
                Some(next) => node = next,
                None => unmatched.push(i),
            }
        }
        WalkResult {
            node,
            letter: self.trie.letter(node),
            unmatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_table::{build_table, CodeTable};
    use crate::pattern::MorsePattern;
    use crate::trie::build_trie;
    use crate::symbol::Symbol::{Dash, Dot};

    fn symbols(s: &str) -> Vec<Symbol> {
        s.parse::<MorsePattern>().unwrap().symbols().to_vec()
    }

    #[test]
    fn test_perfect_match_exact() {
        let trie = build_trie(&build_table()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        let result = traversal.perfect_match(&symbols("-.-."));
        assert_eq!(result.kind, MatchKind::ExactMatch);
        assert_eq!(result.index, 4);
        assert_eq!(trie.letter(result.node).map(Letter::as_char), Some('C'));
    }

    #[test]
    fn test_perfect_match_no_match() {
        let trie = build_trie(&build_table()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        let result = traversal.perfect_match(&symbols("....."));
        assert_eq!(result.kind, MatchKind::NoMatch);
        assert_eq!(result.index, 4);
        assert_eq!(trie.letter(result.node).map(Letter::as_char), Some('H'));
    }

    #[test]
    fn test_perfect_match_empty_sequence() {
        let trie = build_trie(&build_table()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        let result = traversal.perfect_match(&[]);
        assert_eq!(result.kind, MatchKind::SequenceIsAPrefix);
        assert_eq!(result.index, 0);
        assert_eq!(result.node, trie.root());
    }

    #[test]
    fn test_perfect_match_sequence_is_prefix() {
        let trie = build_trie(&CodeTable::parse_entries(&[('K', "-.-")]).unwrap()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        let result = traversal.perfect_match(&[Dash, Dot]);
        assert_eq!(result.kind, MatchKind::SequenceIsAPrefix);
        assert_eq!(result.index, 2);
    }

    #[test]
    fn test_lenient_walk_skips_missing_edges() {
        let trie = build_trie(&build_table()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        // H ma pełną głębokość; piąta kropka nie ma krawędzi.
        let result = traversal.lenient_walk(symbols("....."));
        assert_eq!(result.letter.map(Letter::as_char), Some('H'));
        assert_eq!(result.unmatched, vec![4]);

        // Pominięty symbol w środku: po O (---) brak kropki, dalej brak kreski.
        let result = traversal.lenient_walk(symbols("---.-"));
        assert_eq!(result.letter.map(Letter::as_char), Some('O'));
        assert_eq!(result.unmatched, vec![3, 4]);
    }

    #[test]
    fn test_lenient_walk_continues_after_skip() {
        let trie = build_trie(&CodeTable::parse_entries(&[('A', ".-"), ('E', ".")]).unwrap()).unwrap();
        let traversal = TrieTraversal::new(&trie);

        // Kreska z korzenia nie istnieje; potem ".-" prowadzi do A.
        let result = traversal.lenient_walk([Dash, Dot, Dash]);
        assert_eq!(result.letter.map(Letter::as_char), Some('A'));
        assert_eq!(result.unmatched, vec![0]);
    }

    #[test]
    fn test_lenient_walk_empty_ends_at_root() {
        let trie = build_trie(&build_table()).unwrap();
        let result = TrieTraversal::new(&trie).lenient_walk(Vec::new());
        assert_eq!(result.node, trie.root());
        assert_eq!(result.letter, None);
        assert!(result.unmatched.is_empty());
    }
}
