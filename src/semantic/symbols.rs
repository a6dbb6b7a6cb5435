//! Scoped symbol table
//!
//! A stack of [`Scope`] frames, innermost last. The global frame is pushed at
//! construction and can never be popped.

use super::diagnostics::SemanticError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Primitive types of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Text,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Text => write!(f, "string"),
        }
    }
}

/// A declared identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierInfo {
    pub name: String,
    pub data_type: DataType,
    /// Line of the declaration
    pub line: usize,
}

impl fmt::Display for IdentifierInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} (line {})", self.name, self.data_type, self.line)
    }
}

/// One level of the visibility stack.
///
/// Entries keep declaration order so the dump is stable.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    entries: Vec<IdentifierInfo>,
    index: FxHashMap<String, usize>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&IdentifierInfo> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentifierInfo> {
        self.entries.iter()
    }

    fn insert(&mut self, info: IdentifierInfo) {
        self.index.insert(info.name.clone(), self.entries.len());
        self.entries.push(info);
    }
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a table holding only the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Declare `name` in the innermost scope.
    ///
    /// On a conflict the existing entry is kept and nothing is inserted.
    pub fn declare(
        &mut self,
        name: &str,
        data_type: DataType,
        line: usize,
    ) -> Result<(), SemanticError> {
        let current = self.current_scope_mut();
        if current.contains(name) {
            return Err(SemanticError::Redeclaration {
                name: name.to_string(),
                line,
            });
        }
        current.insert(IdentifierInfo {
            name: name.to_string(),
            data_type,
            line,
        });
        Ok(())
    }

    /// Find `name`, searching from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&IdentifierInfo> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope. The global scope stays; returns `None` then.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Number of active scopes (at least 1)
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Render all scopes, outermost first.
    pub fn format(&self) -> String {
        self.to_string()
    }

    fn current_scope_mut(&mut self) -> &mut Scope {
        // `scopes` is never empty: `pop_scope` keeps the global frame
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== SYMBOL TABLE =====")?;
        for (idx, scope) in self.scopes.iter().enumerate() {
            writeln!(f, "Scope {}:", idx)?;
            if scope.is_empty() {
                writeln!(f, "  (empty)")?;
            }
            for info in scope.iter() {
                writeln!(f, "  {}", info)?;
            }
        }
        writeln!(f, "========================")
    }
}
