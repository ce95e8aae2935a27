use tracing::debug;

use crate::code_table::CodeTable;
use crate::error::{AlphabetError, Result};
use crate::iterator::PatternIterator;
use crate::letter::Letter;
use crate::pattern::MorsePattern;
use crate::symbol::Symbol;
use crate::trie_trait::{NodeId, SymbolTrie};

/// Identyfikator korzenia; korzeń reprezentuje pusty wzorzec.
pub const ROOT_NODE: NodeId = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    /// Dzieci indeksowane przez `Symbol::index()`.
    children: [Option<NodeId>; 2],
    letter: Option<Letter>,
}

/// Binarne drzewo dekodujące przechowywane jako arena węzłów.
///
/// Budowane raz z tabeli kodów (`build_trie`) i tylko do odczytu po
/// konstrukcji. Węzły nie są współdzielone z innymi instancjami.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

/// Buduje drzewo dekodujące z tabeli kodów.
///
/// Dla każdej pary (litera, wzorzec) schodzi od korzenia, tworząc brakujące
/// węzły, i zapisuje literę w węźle końcowym. Jeżeli węzeł końcowy ma już
/// literę, budowa kończy się błędem `DuplicatePattern`.
pub fn build_trie(table: &CodeTable) -> Result<DecodeTrie> {
    let mut trie = DecodeTrie {
        nodes: vec![TrieNode::default()],
    };
    for (&letter, pattern) in table {
        trie.insert(letter, pattern)?;
    }
    debug!(
        letters = table.len(),
        nodes = trie.nodes.len(),
        "zbudowano drzewo dekodujące"
    );
    Ok(trie)
}

impl DecodeTrie {
    fn insert(&mut self, letter: Letter, pattern: &MorsePattern) -> Result<()> {
        let mut current = ROOT_NODE;
        for &symbol in pattern.symbols() {
            current = match self.nodes[current].children[symbol.index()] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children[symbol.index()] = Some(next);
                    next
                }
            };
        }
        // Pusty wzorzec jest odrzucany przez MorsePattern, więc current != ROOT_NODE.
        let node = &mut self.nodes[current];
        match node.letter {
            Some(existing) => Err(AlphabetError::DuplicatePattern {
                pattern: pattern.to_string(),
                existing: existing.as_char(),
                duplicate: letter.as_char(),
            }),
            None => {
                node.letter = Some(letter);
                Ok(())
            }
        }
    }

    /// Iterator po wszystkich (wzorzec, litera) w kolejności DFS, kropka przed kreską.
    pub fn patterns(&self) -> PatternIterator<'_, Self> {
        PatternIterator::new(self)
    }

    /// Odtwarza tabelę kodów z zawartości drzewa.
    pub fn to_table(&self) -> Result<CodeTable> {
        CodeTable::from_entries(self.patterns().map(|(pattern, letter)| (letter, pattern)))
    }
}

impl SymbolTrie for DecodeTrie {
    fn root(&self) -> NodeId {
        ROOT_NODE
    }

    fn child(&self, node: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.children[symbol.index()])
    }

    fn letter(&self, node: NodeId) -> Option<Letter> {
        self.nodes.get(node).and_then(|n| n.letter)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_table::build_table;
    use assert_matches::assert_matches;

    fn walk(trie: &DecodeTrie, pattern: &str) -> Option<Letter> {
        let pattern: MorsePattern = pattern.parse().unwrap();
        let mut node = trie.root();
        for &symbol in pattern.symbols() {
            node = trie.child(node, symbol)?;
        }
        trie.letter(node)
    }

    #[test]
    fn test_build_trie_canonical() {
        let table = build_table();
        let trie = build_trie(&table).unwrap();
        // Korzeń + 2 + 4 + 8 + 12 węzłów na głębokościach 1..4.
        assert_eq!(trie.node_count(), 27);
        assert_eq!(trie.letter(trie.root()), None);
        for (&letter, pattern) in &table {
            assert_eq!(walk(&trie, &pattern.to_string()), Some(letter));
        }
    }

    #[test]
    fn test_root_children() {
        let trie = build_trie(&build_table()).unwrap();
        let e = trie.child(trie.root(), Symbol::Dot).unwrap();
        let t = trie.child(trie.root(), Symbol::Dash).unwrap();
        assert_eq!(trie.letter(e).map(Letter::as_char), Some('E'));
        assert_eq!(trie.letter(t).map(Letter::as_char), Some('T'));
    }

    #[test]
    fn test_missing_edges_and_invalid_nodes() {
        let trie = build_trie(&build_table()).unwrap();
        let h = (0..4).try_fold(trie.root(), |n, _| trie.child(n, Symbol::Dot)).unwrap();
        assert_eq!(trie.letter(h).map(Letter::as_char), Some('H'));
        assert_eq!(trie.child(h, Symbol::Dot), None);
        assert_eq!(trie.child(h, Symbol::Dash), None);
        assert_eq!(trie.child(10_000, Symbol::Dot), None);
        assert_eq!(trie.letter(10_000), None);
    }

    #[test]
    fn test_duplicate_pattern_fails_fast() {
        let table = CodeTable::parse_entries(&[('A', ".-"), ('E', "."), ('N', ".-")]).unwrap();
        let result = build_trie(&table);
        assert_matches!(
            result,
            Err(AlphabetError::DuplicatePattern { ref pattern, existing: 'A', duplicate: 'N' }) if pattern == ".-"
        );
    }

    #[test]
    fn test_prefix_node_without_letter() {
        let table = CodeTable::parse_entries(&[('A', ".-.")]).unwrap();
        let trie = build_trie(&table).unwrap();
        assert_eq!(trie.node_count(), 4);
        assert_eq!(walk(&trie, "."), None);
        assert_eq!(walk(&trie, ".-"), None);
        assert_eq!(walk(&trie, ".-.").map(Letter::as_char), Some('A'));
    }

    #[test]
    fn test_to_table_round_trip() {
        let table = build_table();
        let trie = build_trie(&table).unwrap();
        assert_eq!(trie.to_table().unwrap(), table);
    }

    #[test]
    fn test_build_trie_is_deterministic() {
        let table = build_table();
        assert_eq!(build_trie(&table).unwrap(), build_trie(&build_table()).unwrap());
    }
}
