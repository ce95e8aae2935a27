use crate::letter::Letter;
use crate::pattern::MorsePattern;
use crate::symbol::Symbol;
use crate::trie_trait::{NodeId, SymbolTrie};

/// Iterator po wzorcach zapisanych w drzewie (DFS, kropka przed kreską).
///
/// Zwraca tylko węzły niosące literę, razem ze ścieżką od korzenia.
#[derive(Debug)]
pub struct PatternIterator<'a, T: SymbolTrie + ?Sized + 'a> {
    trie: &'a T,
    // (węzeł, ścieżka symboli od korzenia do węzła)
    stack: Vec<(NodeId, Vec<Symbol>)>,
}

impl<'a, T: SymbolTrie + ?Sized> PatternIterator<'a, T> {
    pub fn new(trie: &'a T) -> Self {
        Self::from_node(trie, trie.root())
    }

    /// Iteruje poddrzewo zaczynające się w `start_node`; ścieżki są względne.
    ///
    /// Litera samego `start_node` nie jest zwracana, bo jej ścieżka względna
    /// jest pusta. Zwracane są tylko węzły leżące głębiej.
    pub fn from_node(trie: &'a T, start_node: NodeId) -> Self {
        PatternIterator {
            trie,
            stack: vec![(start_node, Vec::new())],
        }
    }
}

impl<'a, T: SymbolTrie + ?Sized> Iterator for PatternIterator<'a, T> {
    type Item = (MorsePattern, Letter);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            // Kreska na stos pierwsza, żeby kropka została odwiedzona wcześniej.
            for &symbol in Symbol::ALL.iter().rev() {
                if let Some(child) = self.trie.child(node, symbol) {
                    let mut child_path = path.clone();
                    child_path.push(symbol);
                    self.stack.push((child, child_path));
                }
            }
            if let Some(letter) = self.trie.letter(node) {
                if let Ok(pattern) = MorsePattern::new(path) {
                    return Some((pattern, letter));
                }
            }
        }
        None
    }
}
