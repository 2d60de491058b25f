//! Sprite document assembly.
//!
//! The sprite is one mutable document appended to by every per-file
//! pipeline. All appends are routed through a single actor so they
//! serialize through its mailbox instead of racing on shared state; the
//! child sequence is never exposed for direct mutation.

use tokio::sync::mpsc;

use super::symbol::Symbol;

const SPRITE_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" style="display: none;">"#;
const SPRITE_EMPTY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" style="display: none;"/>"#;

/// The single output document: symbols in append order.
#[derive(Debug, Default)]
pub struct SpriteDocument {
    symbols: Vec<Symbol>,
}

impl SpriteDocument {
    /// Append a symbol to the child sequence.
    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Serialize the whole document, root element plus all appended
    /// symbols in their current order. An empty sprite collapses to a
    /// self-closing root.
    pub fn serialize(&self) -> String {
        if self.symbols.is_empty() {
            return SPRITE_EMPTY.to_string();
        }

        let capacity = SPRITE_OPEN.len()
            + self.symbols.iter().map(|s| s.serialized.len()).sum::<usize>()
            + "</svg>".len();
        let mut out = String::with_capacity(capacity);
        out.push_str(SPRITE_OPEN);
        for symbol in &self.symbols {
            out.push_str(&symbol.serialized);
        }
        out.push_str("</svg>");
        out
    }
}

/// Owns the sprite document for the duration of one run; the only writer.
pub struct AssemblerActor {
    rx: mpsc::Receiver<Symbol>,
    document: SpriteDocument,
}

impl AssemblerActor {
    pub fn new(rx: mpsc::Receiver<Symbol>) -> Self {
        Self {
            rx,
            document: SpriteDocument::default(),
        }
    }

    /// Drain the mailbox, appending symbols in arrival order. Serializes
    /// and returns the document once every sender is gone.
    pub async fn run(mut self) -> String {
        while let Some(symbol) = self.rx.recv().await {
            self.document.append(symbol);
        }
        self.document.serialize()
    }
}
