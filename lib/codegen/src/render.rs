//! C# rendering of the declaration tree.
//!
//! All layout decisions live here: LF line endings, four-space indents, one
//! blank line between members. Rendering the same tree twice yields
//! byte-identical text.

use crate::decl::{ClassDecl, EnumDecl, FieldDecl, TypeExpr, ValueDecl};

/// Indentation-tracking line writer over a `String`.
pub struct CodeWriter {
    out: String,
    indent: usize,
}

impl CodeWriter {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self { out: String::new(), indent: 0 }
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str(Self::INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `header` followed by `{`, indenting until `close_block`.
    pub fn open_block(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.indent += 1;
    }

    pub fn close_block(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a string for use inside a C# string literal.
fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render a type expression to its C# spelling.
pub fn type_expr(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Primitive(p) => p.csharp_name().to_string(),
        TypeExpr::Reference { qualifier: Some(q), name } => format!("{}.{}", q, name),
        TypeExpr::Reference { qualifier: None, name } => name.clone(),
        TypeExpr::Enum(name) => name.clone(),
        TypeExpr::List(inner) => format!("List<{}>", type_expr(inner)),
    }
}

fn doc_lines(w: &mut CodeWriter, doc: &Option<String>) {
    if let Some(text) = doc {
        w.line(&format!("/// <summary>{}</summary>", text));
        w.line(&format!("[Description(\"{}\")]", escape_literal(text)));
    }
}

fn field(w: &mut CodeWriter, decl: &FieldDecl) {
    doc_lines(w, &decl.doc);
    for marker in &decl.markers {
        w.line(&format!("[{}]", marker));
    }
    w.line(&format!(
        "public {} {} {{ get; set; }}",
        type_expr(&decl.ty),
        decl.name
    ));
}

/// Render one entity class.
pub fn class(w: &mut CodeWriter, decl: &ClassDecl) {
    w.line(&format!("[CubaName(\"{}\")]", decl.cuba_name));
    let mut bases = decl.base.clone();
    for cap in &decl.capabilities {
        bases.push_str(", ");
        bases.push_str(cap);
    }
    w.open_block(&format!("public class {} : {}", decl.name, bases));
    for (i, f) in decl.fields.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        field(w, f);
    }
    w.close_block();
}

fn value(w: &mut CodeWriter, decl: &ValueDecl) {
    doc_lines(w, &decl.doc);
    match decl.number {
        Some(n) => w.line(&format!("{} = {},", decl.name, n)),
        None => w.line(&format!("{},", decl.name)),
    }
}

/// Render one enum declaration.
pub fn enumeration(w: &mut CodeWriter, decl: &EnumDecl) {
    w.line(&format!("[CubaName(\"{}\")]", decl.cuba_name));
    w.open_block(&format!("public enum {}", decl.name));
    for (i, v) in decl.values.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        value(w, v);
    }
    w.close_block();
}

/// Render a full module artifact: using preamble, namespace wrapper, body.
pub fn module<F>(usings: &[&str], namespace: &str, body: F) -> String
where
    F: FnOnce(&mut CodeWriter),
{
    let mut w = CodeWriter::new();
    for u in usings {
        w.line(&format!("using {};", u));
    }
    w.blank();
    w.open_block(&format!("namespace {}", namespace));
    body(&mut w);
    w.close_block();
    w.finish()
}
