use eduspeak::application::services::strip_reasoning_markup;

#[test]
fn given_think_block_when_stripping_then_only_answer_remains() {
    let raw = "<think>Let me consider tense.</think>  I went home.";
    assert_eq!(strip_reasoning_markup(raw), "I went home.");
}

#[test]
fn given_multiline_think_block_when_stripping_then_spans_newlines() {
    let raw = "<think>\nline one\nline two\n</think>\n\nFinal answer\n";
    assert_eq!(strip_reasoning_markup(raw), "Final answer");
}

#[test]
fn given_several_blocks_when_stripping_then_each_is_removed_non_greedily() {
    let raw = "<think>a</think>Keep this<think>b</think> and this";
    assert_eq!(strip_reasoning_markup(raw), "Keep this and this");
}

#[test]
fn given_unterminated_think_when_stripping_then_trailing_reasoning_is_dropped() {
    let raw = "Answer first <think>reasoning that never closes";
    assert_eq!(strip_reasoning_markup(raw), "Answer first");
}

#[test]
fn given_dangling_close_tag_when_stripping_then_leading_reasoning_is_dropped() {
    let raw = "reasoning without opener</think>The answer";
    assert_eq!(strip_reasoning_markup(raw), "The answer");
}

#[test]
fn given_plain_text_when_stripping_then_only_trims() {
    assert_eq!(strip_reasoning_markup("  plain text \n"), "plain text");
}

#[test]
fn given_assorted_inputs_when_stripping_then_output_never_contains_markers() {
    let inputs = [
        "<think></think>",
        "<think><think>nested</think></think>tail",
        "</think></think>x",
        "a<think>b</think>c<think>d",
        "<THINK>upper</THINK> stays",
        "",
    ];
    for raw in inputs {
        let cleaned = strip_reasoning_markup(raw);
        assert!(!cleaned.contains("<think>"), "{:?} -> {:?}", raw, cleaned);
        assert!(!cleaned.contains("</think>"), "{:?} -> {:?}", raw, cleaned);
    }
}
