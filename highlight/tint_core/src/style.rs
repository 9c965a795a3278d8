//! Style tags assigned to every character of a highlighted document.
//!
//! Discriminants are grouped into semantic ranges so that range checks
//! stay cheap:
//!
//! | Range  | Category                                    |
//! |--------|---------------------------------------------|
//! | 0-7    | Space equivalent (default, comments, tags)  |
//! | 8-31   | Literals and their sub-spans                |
//! | 32-47  | Operators and numbers                       |
//! | 48-63  | Words (identifiers, keywords, names)        |
//! | 64-79  | Sigils (environment, option, register)      |
//!
//! Every style that can sit on the nested-state stack is below 32 so it
//! fits the five-bit slots of the packed line state.

/// Highlight class of a character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Style {
    // ─── Space equivalent (0-7) ──────────────────────────────────────
    #[default]
    Default = 0,
    CommentLine = 1,
    CommentBlock = 2,
    CommentBlockDoc = 3,
    /// `@param` or `{@link ...}` inside a doc comment.
    CommentTagAt = 4,
    /// `<p>` or `</p>` inside a doc comment.
    CommentTagHtml = 5,
    /// `TODO:` style markers inside comments.
    TaskMarker = 6,

    // ─── Literals (8-31) ─────────────────────────────────────────────
    Character = 8,
    String = 9,
    /// String template (`STR."..."`), supports `\{...}` interpolation.
    Template = 10,
    TripleString = 11,
    TripleTemplate = 12,
    /// Single-quoted literal string, `''` is the only escape.
    LiteralString = 13,
    Regex = 14,
    EscapeChar = 15,
    FormatSpecifier = 16,
    Placeholder = 17,
    BlobHex = 18,

    // ─── Operators and numbers (32-47) ───────────────────────────────
    Operator = 32,
    /// Operator inside an interpolation; braces here push and pop.
    OperatorNested = 33,
    Number = 34,

    // ─── Words (48-63) ───────────────────────────────────────────────
    Identifier = 48,
    Keyword = 49,
    /// A keyword in a position where it cannot start a command.
    KeywordDemoted = 50,
    Type = 51,
    Directive = 52,
    Command = 53,
    Class = 54,
    Interface = 55,
    Enum = 56,
    Record = 57,
    Constant = 58,
    Annotation = 59,
    Label = 60,
    Function = 61,
    FunctionDefinition = 62,

    // ─── Sigils (64-79) ──────────────────────────────────────────────
    /// `$HOME`, also used for `g:` style variable namespaces.
    EnvVariable = 64,
    OptionName = 65,
    Register = 66,
}

impl Style {
    /// All styles in discriminant order.
    pub const ALL: [Style; 39] = [
        Style::Default,
        Style::CommentLine,
        Style::CommentBlock,
        Style::CommentBlockDoc,
        Style::CommentTagAt,
        Style::CommentTagHtml,
        Style::TaskMarker,
        Style::Character,
        Style::String,
        Style::Template,
        Style::TripleString,
        Style::TripleTemplate,
        Style::LiteralString,
        Style::Regex,
        Style::EscapeChar,
        Style::FormatSpecifier,
        Style::Placeholder,
        Style::BlobHex,
        Style::Operator,
        Style::OperatorNested,
        Style::Number,
        Style::Identifier,
        Style::Keyword,
        Style::KeywordDemoted,
        Style::Type,
        Style::Directive,
        Style::Command,
        Style::Class,
        Style::Interface,
        Style::Enum,
        Style::Record,
        Style::Constant,
        Style::Annotation,
        Style::Label,
        Style::Function,
        Style::FunctionDefinition,
        Style::EnvVariable,
        Style::OptionName,
        Style::Register,
    ];

    /// Raw discriminant.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Style::as_u8`]. Unknown values map to `None`.
    pub const fn from_u8(raw: u8) -> Option<Style> {
        Some(match raw {
            0 => Style::Default,
            1 => Style::CommentLine,
            2 => Style::CommentBlock,
            3 => Style::CommentBlockDoc,
            4 => Style::CommentTagAt,
            5 => Style::CommentTagHtml,
            6 => Style::TaskMarker,
            8 => Style::Character,
            9 => Style::String,
            10 => Style::Template,
            11 => Style::TripleString,
            12 => Style::TripleTemplate,
            13 => Style::LiteralString,
            14 => Style::Regex,
            15 => Style::EscapeChar,
            16 => Style::FormatSpecifier,
            17 => Style::Placeholder,
            18 => Style::BlobHex,
            32 => Style::Operator,
            33 => Style::OperatorNested,
            34 => Style::Number,
            48 => Style::Identifier,
            49 => Style::Keyword,
            50 => Style::KeywordDemoted,
            51 => Style::Type,
            52 => Style::Directive,
            53 => Style::Command,
            54 => Style::Class,
            55 => Style::Interface,
            56 => Style::Enum,
            57 => Style::Record,
            58 => Style::Constant,
            59 => Style::Annotation,
            60 => Style::Label,
            61 => Style::Function,
            62 => Style::FunctionDefinition,
            64 => Style::EnvVariable,
            65 => Style::OptionName,
            66 => Style::Register,
            _ => return None,
        })
    }

    /// Default, comments, doc tags and task markers.
    ///
    /// Lookback heuristics skip characters in these styles the same way
    /// they skip whitespace.
    #[inline]
    pub const fn is_space_equiv(self) -> bool {
        (self as u8) <= Style::TaskMarker as u8
    }

    /// Whether this style can be stored in a packed nested-state slot.
    #[inline]
    pub const fn is_nestable(self) -> bool {
        (self as u8) < 32
    }

    /// Short lowercase name, used by debugging output.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::CommentLine => "comment-line",
            Style::CommentBlock => "comment-block",
            Style::CommentBlockDoc => "comment-doc",
            Style::CommentTagAt => "comment-tag-at",
            Style::CommentTagHtml => "comment-tag-html",
            Style::TaskMarker => "task-marker",
            Style::Character => "character",
            Style::String => "string",
            Style::Template => "template",
            Style::TripleString => "triple-string",
            Style::TripleTemplate => "triple-template",
            Style::LiteralString => "literal-string",
            Style::Regex => "regex",
            Style::EscapeChar => "escape",
            Style::FormatSpecifier => "format-specifier",
            Style::Placeholder => "placeholder",
            Style::BlobHex => "blob",
            Style::Operator => "operator",
            Style::OperatorNested => "operator-nested",
            Style::Number => "number",
            Style::Identifier => "identifier",
            Style::Keyword => "keyword",
            Style::KeywordDemoted => "keyword-demoted",
            Style::Type => "type",
            Style::Directive => "directive",
            Style::Command => "command",
            Style::Class => "class",
            Style::Interface => "interface",
            Style::Enum => "enum",
            Style::Record => "record",
            Style::Constant => "constant",
            Style::Annotation => "annotation",
            Style::Label => "label",
            Style::Function => "function",
            Style::FunctionDefinition => "function-definition",
            Style::EnvVariable => "env-variable",
            Style::OptionName => "option",
            Style::Register => "register",
        }
    }
}
