// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in categories and lookup over the merged built-in + user-defined list.

use crate::models::{Category, DEFAULT_ICON, TxKind};
use serde::Serialize;

pub struct Builtin {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const INCOME: &[Builtin] = &[
    Builtin { id: "salary", name: "Salary", icon: "💰" },
    Builtin { id: "freelance", name: "Freelance", icon: "💻" },
    Builtin { id: "investments", name: "Investments", icon: "📈" },
    Builtin { id: "gift", name: "Gift", icon: "🎁" },
    Builtin { id: "other_income", name: "Other", icon: "➕" },
];

pub const EXPENSE: &[Builtin] = &[
    Builtin { id: "food", name: "Food", icon: "🍔" },
    Builtin { id: "transport", name: "Transport", icon: "🚗" },
    Builtin { id: "shopping", name: "Shopping", icon: "🛍" },
    Builtin { id: "entertainment", name: "Entertainment", icon: "🎬" },
    Builtin { id: "health", name: "Health", icon: "🏥" },
    Builtin { id: "utilities", name: "Utilities", icon: "🏠" },
    Builtin { id: "education", name: "Education", icon: "📚" },
    Builtin { id: "other_expense", name: "Other", icon: "➖" },
];

pub const UNCATEGORIZED: &str = "(uncategorized)";

pub fn builtins(kind: TxKind) -> &'static [Builtin] {
    match kind {
        TxKind::Income => INCOME,
        TxKind::Expense => EXPENSE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub builtin: bool,
}

/// Resolves category ids against built-ins first, then the user's own
/// categories in the order the server returned them.
#[derive(Debug, Clone, Copy)]
pub struct CategoryResolver<'a> {
    custom: &'a [Category],
}

impl<'a> CategoryResolver<'a> {
    pub fn new(custom: &'a [Category]) -> Self {
        Self { custom }
    }

    pub fn all(&self, kind: TxKind) -> Vec<CategoryEntry> {
        let mut out: Vec<CategoryEntry> = builtins(kind)
            .iter()
            .map(|b| CategoryEntry {
                id: b.id.to_string(),
                name: b.name.to_string(),
                icon: b.icon.to_string(),
                builtin: true,
            })
            .collect();
        out.extend(
            self.custom
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| CategoryEntry {
                    id: c.id.to_string(),
                    name: c.name.clone(),
                    icon: c.icon.clone(),
                    builtin: false,
                }),
        );
        out
    }

    fn find(&self, id: &str, kind: TxKind) -> Option<CategoryEntry> {
        let id = id.trim();
        self.all(kind).into_iter().find(|c| c.id.trim() == id)
    }

    pub fn is_known(&self, id: &str, kind: TxKind) -> bool {
        self.find(id, kind).is_some()
    }

    /// Never empty: unknown ids get the generic glyph.
    pub fn icon(&self, id: &str, kind: TxKind) -> String {
        match self.find(id, kind) {
            Some(c) if !c.icon.trim().is_empty() => c.icon,
            _ => DEFAULT_ICON.to_string(),
        }
    }

    /// Never empty: unknown ids are shown as-is.
    pub fn name(&self, id: &str, kind: TxKind) -> String {
        match self.find(id, kind) {
            Some(c) if !c.name.trim().is_empty() => c.name,
            _ if !id.trim().is_empty() => id.to_string(),
            _ => UNCATEGORIZED.to_string(),
        }
    }
}
