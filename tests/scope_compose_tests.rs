//! Tests for composing scopes with the other optics.

#![cfg(feature = "optics")]

use rstest::rstest;
use scopic::control::Either;
use scopic::lens;
use scopic::optics::{
    EPScope, Fold, FoldScopeExtension, FunctionFold, FunctionGetter, FunctionIso, FunctionLens,
    FunctionOptional, FunctionPrism,
    FunctionSetter, GetterScopeExtension, IsoScopeExtension, LensScopeExtension,
    OptionalScopeExtension, POptional, PPrism, PScope, PSetter, PTraversal, PrismScopeExtension,
    SetterScopeExtension, TraversalScopeExtension, VecTraversal, eprism, scope, some_prism,
};

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Block {
    Text(String),
    Image { width: u32, height: u32 },
}

#[derive(Clone, PartialEq, Debug)]
struct Page {
    title: String,
    lead: Block,
}

fn text_prism() -> impl PPrism<Block, Block, String, String> + Clone {
    FunctionPrism::new(
        |block: Block| match block {
            Block::Text(text) => Either::Right(text),
            other => Either::Left(other),
        },
        Block::Text,
    )
}

fn text() -> impl PScope<Block, Block, String, String> + Clone {
    text_prism().to_scope()
}

fn image() -> Block {
    Block::Image {
        width: 4,
        height: 3,
    }
}

fn page(lead: Block) -> Page {
    Page {
        title: "home".to_string(),
        lead,
    }
}

// =============================================================================
// Lens and Iso on the left
// =============================================================================

#[rstest]
fn test_lens_compose_scope_writes_fallback_through_lens() {
    let lead_text = lens!(Page, lead).compose_scope(text());

    assert_eq!(lead_text.get_option(page(image())), None);
    assert_eq!(
        lead_text.get_or_modify(page(image())),
        Either::Left(page(image()))
    );
    assert_eq!(
        lead_text.put(page(image()), "hi".to_string()),
        page(Block::Text("hi".to_string()))
    );
    assert_eq!(lead_text.put(page(image()), "x".to_string()).title, "home");
}

#[rstest]
fn test_lens_compose_escope_reports_inner_diagnostic() {
    let lead_text = lens!(Page, lead).compose_escope(text().with_error(|block: &Block| {
        format!("not text: {block:?}")
    }));

    assert_eq!(
        lead_text.get_or_error(page(Block::Text("a".to_string()))),
        Ok("a".to_string())
    );
    assert!(lead_text
        .get_or_error(page(image()))
        .is_err_and(|error| error.starts_with("not text: Image")));
}

#[rstest]
fn test_lens_to_scope_always_matches() {
    let title = lens!(Page, title).to_scope();

    assert_eq!(title.get_option(page(image())), Some("home".to_string()));
    assert_eq!(title.put(page(image()), "about".to_string()).title, "about");
}

#[rstest]
fn test_iso_compose_scope() {
    let wrapped = FunctionIso::new(
        |(text,): (String,)| Block::Text(text),
        |block: Block| match block {
            Block::Text(text) => (text,),
            Block::Image { width, height } => (format!("{width}x{height}"),),
        },
    );
    let through = wrapped.compose_scope(text());

    assert_eq!(through.get_option(("a".to_string(),)), Some("a".to_string()));
    assert_eq!(through.put(("a".to_string(),), "b".to_string()), ("b".to_string(),));
}

#[rstest]
fn test_iso_to_scope_ignores_source_on_write() {
    let celsius = FunctionIso::new(|kelvin: i64| kelvin - 273, |celsius: i64| celsius + 273);
    let kelvin = celsius.to_scope();

    assert_eq!(kelvin.get_option(300), Some(27));
    assert_eq!(kelvin.put(0, 0), 273);
}

// =============================================================================
// Scope on the left
// =============================================================================

#[rstest]
fn test_scope_compose_lens_demotes_to_optional() {
    let word_count = text().compose_lens(FunctionLens::new(
        |text: &String| text.split_whitespace().count(),
        |_: String, count: usize| "word ".repeat(count).trim_end().to_string(),
    ));

    assert_eq!(word_count.get_option(Block::Text("a b c".to_string())), Some(3));
    assert_eq!(word_count.get_option(image()), None);
    assert_eq!(word_count.set(image(), 2), image());
}

#[rstest]
fn test_scope_compose_eprism_keeps_scope_put() {
    let short = eprism(
        |text: &String| {
            if text.len() <= 3 {
                Ok(text.clone())
            } else {
                Err(text.len())
            }
        },
        |text: String| text,
    );
    let short_text = text().compose_eprism(short);

    assert_eq!(short_text.get_or_error(image()), Err(None));
    assert_eq!(
        short_text.get_or_error(Block::Text("long".to_string())),
        Err(Some(4))
    );
    assert_eq!(
        short_text.put(image(), "ok".to_string()),
        Block::Text("ok".to_string())
    );
}

#[rstest]
fn test_scope_compose_traversal() {
    let every_char = scope(
        |text: &String| (!text.is_empty()).then(|| text.chars().collect::<Vec<_>>()),
        |_, chars: Vec<char>| chars.into_iter().collect::<String>(),
    )
    .compose_traversal(VecTraversal::<char>::new());

    assert_eq!(every_char.get_all(&"ab".to_string()), vec!['a', 'b']);
    assert_eq!(
        every_char.modify_all("ab".to_string(), |c| c.to_ascii_uppercase()),
        "AB"
    );
    assert!(every_char.get_all(&String::new()).is_empty());
}

// =============================================================================
// Weaker optics on the left
// =============================================================================

#[rstest]
fn test_prism_compose_scope_is_optional() {
    let nested = some_prism::<Block, Block>().compose_scope(text());

    assert_eq!(nested.get_option(Some(Block::Text("a".to_string()))), Some("a".to_string()));
    assert_eq!(nested.get_option(None), None);
    assert_eq!(nested.set(None, "a".to_string()), None);
}

#[rstest]
fn test_optional_compose_scope() {
    let first_block = FunctionOptional::new(
        |blocks: Vec<Block>| match blocks.first() {
            Some(block) => Either::Right(block.clone()),
            None => Either::Left(blocks),
        },
        |mut blocks: Vec<Block>, block: Block| {
            if let Some(first) = blocks.first_mut() {
                *first = block;
            }
            blocks
        },
    );
    let first_text = first_block.compose_scope(text());

    assert_eq!(
        first_text.set(vec![image()], "t".to_string()),
        vec![image()]
    );
    assert_eq!(
        first_text.modify(vec![Block::Text("a".to_string())], |text| text + "!"),
        vec![Block::Text("a!".to_string())]
    );
}

#[rstest]
fn test_traversal_compose_scope_touches_matching_elements() {
    let texts = VecTraversal::<Block>::new().compose_scope(text());
    let blocks = vec![Block::Text("a".to_string()), image(), Block::Text("b".to_string())];

    assert_eq!(texts.get_all(&blocks), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(
        texts.modify_all(blocks, |text| text.to_uppercase()),
        vec![Block::Text("A".to_string()), image(), Block::Text("B".to_string())]
    );
}

#[rstest]
fn test_setter_compose_scope() {
    let both = FunctionSetter::new(
        |(left, right): (Block, Block), update: &mut dyn FnMut(Block) -> Block| {
            (update(left), update(right))
        },
    );
    let both_texts = both.compose_scope(text());

    assert_eq!(
        both_texts.modify((Block::Text("a".to_string()), image()), |text| text + "?"),
        (Block::Text("a?".to_string()), image())
    );
}

#[rstest]
fn test_fold_compose_scope() {
    let leads = FunctionFold::new(|pages: &Vec<Page>| {
        pages.iter().map(|page| page.lead.clone()).collect::<Vec<_>>()
    });
    let lead_texts = leads.compose_scope(text());
    let pages = vec![page(image()), page(Block::Text("t".to_string()))];

    assert_eq!(lead_texts.get_all(&pages), vec!["t".to_string()]);
    assert_eq!(lead_texts.length(&pages), 1);
}

#[rstest]
fn test_getter_compose_scope() {
    let lead = FunctionGetter::new(|page: &Page| page.lead.clone());
    let lead_text = lead.compose_scope(text());

    assert_eq!(
        lead_text.get_all(&page(Block::Text("t".to_string()))),
        vec!["t".to_string()]
    );
    assert!(lead_text.get_all(&page(image())).is_empty());
}
