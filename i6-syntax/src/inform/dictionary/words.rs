//! Reserved-word tables for Inform 6 and its standard library.
//!
//! The attribute, property, and verb tables hold library vocabulary; the
//! keyword table holds statement-level reserved words; the directive
//! table holds compiler directives and is the only case-insensitive set.

/// Attributes defined by the standard library.
pub(super) const ATTRIBUTES: &[&str] = &[
    "absent",
    "animate",
    "clothing",
    "concealed",
    "container",
    "door",
    "edible",
    "enterable",
    "female",
    "general",
    "light",
    "lockable",
    "locked",
    "male",
    "moved",
    "neuter",
    "on",
    "open",
    "openable",
    "pluralname",
    "proper",
    "scenery",
    "scored",
    "static",
    "supporter",
    "switchable",
    "talkable",
    "transparent",
    "visited",
    "workflag",
    "worn",
];

/// Properties defined by the standard library.
pub(super) const PROPERTIES: &[&str] = &[
    "add_to_scope",
    "after",
    "article",
    "articles",
    "before",
    "cant_go",
    "capacity",
    "d_to",
    "daemon",
    "describe",
    "description",
    "door_dir",
    "door_to",
    "e_to",
    "each_turn",
    "found_in",
    "grammar",
    "in_to",
    "initial",
    "inside_description",
    "invent",
    "life",
    "list_together",
    "n_to",
    "name",
    "ne_to",
    "number",
    "nw_to",
    "orders",
    "out_to",
    "parse_name",
    "plural",
    "react_after",
    "react_before",
    "s_to",
    "se_to",
    "short_name",
    "short_name_indef",
    "sw_to",
    "time_left",
    "time_out",
    "u_to",
    "w_to",
    "when_closed",
    "when_off",
    "when_on",
    "when_open",
    "with_key",
];

/// Dictionary verbs understood by the standard library grammar.
pub(super) const VERBS: &[&str] = &[
    "again",
    "answer",
    "ask",
    "attack",
    "blow",
    "brief",
    "burn",
    "buy",
    "climb",
    "close",
    "consult",
    "cut",
    "dig",
    "disrobe",
    "drink",
    "drop",
    "eat",
    "empty",
    "enter",
    "examine",
    "exit",
    "fill",
    "get",
    "give",
    "go",
    "inventory",
    "jump",
    "kiss",
    "leave",
    "listen",
    "lock",
    "look",
    "objects",
    "open",
    "places",
    "pray",
    "pronouns",
    "pull",
    "push",
    "put",
    "quit",
    "read",
    "remove",
    "restart",
    "restore",
    "rub",
    "save",
    "score",
    "search",
    "set",
    "show",
    "sing",
    "sleep",
    "smell",
    "squeeze",
    "swim",
    "swing",
    "switch",
    "take",
    "taste",
    "tell",
    "think",
    "throw",
    "tie",
    "touch",
    "transfer",
    "turn",
    "unlock",
    "verbose",
    "verify",
    "wait",
    "wake",
    "walk",
    "wave",
    "wear",
];

/// Statement-level reserved words. Case-sensitive, as in the compiler.
pub(super) const KEYWORDS: &[&str] = &[
    "bold",
    "box",
    "break",
    "child",
    "children",
    "continue",
    "creature",
    "default",
    "do",
    "elder",
    "eldest",
    "else",
    "false",
    "first",
    "fixed",
    "font",
    "for",
    "give",
    "has",
    "hasnt",
    "held",
    "if",
    "in",
    "indirect",
    "inversion",
    "jump",
    "last",
    "metaclass",
    "move",
    "multi",
    "multiexcept",
    "multiheld",
    "multiinside",
    "new_line",
    "nothing",
    "notin",
    "noun",
    "number",
    "objectloop",
    "off",
    "ofclass",
    "on",
    "or",
    "parent",
    "print",
    "print_ret",
    "private",
    "provides",
    "quit",
    "random",
    "read",
    "remove",
    "restore",
    "return",
    "reverse",
    "rfalse",
    "roman",
    "rtrue",
    "save",
    "scope",
    "sibling",
    "spaces",
    "string",
    "style",
    "switch",
    "to",
    "topic",
    "true",
    "underline",
    "until",
    "while",
    "with",
    "younger",
    "youngest",
];

/// Compiler directives. Matched case-insensitively; stored lowercase.
pub(super) const DIRECTIVES: &[&str] = &[
    "abbreviate",
    "array",
    "attribute",
    "btrace",
    "class",
    "constant",
    "default",
    "dictionary",
    "end",
    "endif",
    "extend",
    "fake_action",
    "global",
    "ifdef",
    "iffalse",
    "ifndef",
    "ifnot",
    "iftrue",
    "ifv3",
    "ifv5",
    "import",
    "include",
    "link",
    "listsymbols",
    "lowstring",
    "ltrace",
    "message",
    "nearby",
    "nobtrace",
    "noltrace",
    "notrace",
    "object",
    "property",
    "release",
    "replace",
    "serial",
    "statusline",
    "stub",
    "switches",
    "system_file",
    "trace",
    "verb",
    "version",
    "zcharacter",
];
