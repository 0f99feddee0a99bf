use ahash::HashMap;
use ahash::HashMapExt;
use ast_js::Ref;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum SymbolKind {
  /// `var` and function declarations.
  Hoisted,
  /// `let`, `const` and class declarations.
  Lexical,
  Import,
  /// A free reference with no declaration in the file, e.g. `window`.
  Unbound,
}

#[derive(Clone, Debug, Serialize)]
pub struct Symbol {
  pub name: String,
  pub kind: SymbolKind,
}

/// Flat table of every symbol referenced by one file. Refs index into it.
///
/// Declared names may repeat (shadowing in nested scopes gets its own Ref);
/// unbound names are interned so every free reference to `window` shares a Ref.
#[derive(Default, Debug, Serialize)]
pub struct SymbolTable {
  symbols: Vec<Symbol>,
  #[serde(skip)]
  unbound: HashMap<String, Ref>,
}

impl SymbolTable {
  pub fn new() -> SymbolTable {
    SymbolTable {
      symbols: Vec::new(),
      unbound: HashMap::new(),
    }
  }

  fn push(&mut self, name: &str, kind: SymbolKind) -> Ref {
    let r = Ref(self.symbols.len() as u32);
    self.symbols.push(Symbol {
      name: name.to_string(),
      kind,
    });
    r
  }

  pub fn declare(&mut self, name: &str, kind: SymbolKind) -> Ref {
    debug_assert!(kind != SymbolKind::Unbound, "use `unbound` for free references");
    self.push(name, kind)
  }

  /// Returns the shared Ref for the free global `name`, creating it on first use.
  pub fn unbound(&mut self, name: &str) -> Ref {
    if let Some(&r) = self.unbound.get(name) {
      return r;
    };
    let r = self.push(name, SymbolKind::Unbound);
    self.unbound.insert(name.to_string(), r);
    r
  }

  pub fn get(&self, r: Ref) -> Option<&Symbol> {
    self.symbols.get(r.0 as usize)
  }

  pub fn name(&self, r: Ref) -> Option<&str> {
    self.get(r).map(|s| s.name.as_str())
  }

  /// Refs this table never issued are treated as unbound, since nothing is
  /// known about their declaration.
  pub fn is_unbound(&self, r: Ref) -> bool {
    self
      .get(r)
      .map_or(true, |s| s.kind == SymbolKind::Unbound)
  }

  /// The most recently declared symbol called `name`, if any.
  pub fn find_declared(&self, name: &str) -> Option<Ref> {
    self
      .symbols
      .iter()
      .enumerate()
      .rev()
      .find(|(_, s)| s.kind != SymbolKind::Unbound && s.name == name)
      .map(|(i, _)| Ref(i as u32))
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Ref, &Symbol)> {
    self
      .symbols
      .iter()
      .enumerate()
      .map(|(i, s)| (Ref(i as u32), s))
  }
}
