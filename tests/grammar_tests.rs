use ferrocreole::grammar::RULES;
use ferrocreole::{grammar, ChunkKind, Grammar};

#[test]
fn test_builtin_grammar_compiles() {
    assert!(Grammar::compile(&RULES).is_ok());
}

#[test]
fn test_kind_names_round_trip() {
    for &kind in ChunkKind::ALL {
        assert_eq!(kind.name().parse::<ChunkKind>(), Ok(kind));
    }
    assert!("blink".parse::<ChunkKind>().is_err());
}

#[test]
fn test_identify_blocks() {
    let g = grammar();
    assert_eq!(g.identify("* a", ChunkKind::Top, 0), Some(ChunkKind::UnorderedList));
    assert_eq!(g.identify("# a", ChunkKind::Top, 0), Some(ChunkKind::OrderedList));
    assert_eq!(g.identify("== a", ChunkKind::Top, 0), Some(ChunkKind::Heading2));
    assert_eq!(g.identify("----", ChunkKind::Top, 0), Some(ChunkKind::HorizontalRule));
    assert_eq!(g.identify("|a|", ChunkKind::Top, 0), Some(ChunkKind::Table));
    assert_eq!(g.identify("text", ChunkKind::Top, 0), Some(ChunkKind::Paragraph));
    assert_eq!(g.identify("**bold**", ChunkKind::Top, 0), Some(ChunkKind::Paragraph));
}

#[test]
fn test_identify_inline() {
    let g = grammar();
    assert_eq!(g.identify("**x**", ChunkKind::Paragraph, 0), Some(ChunkKind::Strong));
    assert_eq!(g.identify("a **x**", ChunkKind::Paragraph, 2), Some(ChunkKind::Strong));
    assert_eq!(g.identify("(C)", ChunkKind::Paragraph, 0), Some(ChunkKind::Copyright));
    assert_eq!(g.identify("*x", ChunkKind::Paragraph, 0), Some(ChunkKind::Any));
}

#[test]
fn test_leaf_kinds_have_no_children() {
    let g = grammar();
    assert_eq!(g.identify("text", ChunkKind::Plain, 0), None);
    assert!(!ChunkKind::Plain.is_container());
    assert!(ChunkKind::Paragraph.is_container());
}

#[test]
fn test_chunk_end() {
    let g = grammar();
    assert_eq!(g.chunk_end(ChunkKind::Strong, "**x** y", 0), 5);
    assert_eq!(g.chunk_end(ChunkKind::Strong, "**open", 0), 6);
    assert_eq!(g.chunk_end(ChunkKind::Plain, "ab **c**", 0), 3);
    assert_eq!(g.chunk_end(ChunkKind::Heading1, "= a\nb", 0), 4);
}

#[test]
fn test_hints() {
    let g = grammar();
    assert!(g.hinted(ChunkKind::Paragraph, '*').contains(&ChunkKind::Strong));
    assert!(g.hinted(ChunkKind::Paragraph, '(').contains(&ChunkKind::Trademark));
}
