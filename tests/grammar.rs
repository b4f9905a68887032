use descent::{recognize, Lexer, Parser, Recorder, Status, TokenType};

fn run(source: &str) -> (descent::Summary, Recorder) {
    let mut recorder = Recorder::default();
    let summary = recognize(source, &mut recorder);
    (summary, recorder)
}

#[test]
fn check_full_trace_of_precedence() {
    let (summary, recorder) = run("2+3*4");
    dbg!(recorder.trace());

    assert!(summary.is_accepted());
    assert_eq!(
        recorder.trace(),
        &[
            "Enter <expr>",
            "Enter <term>",
            "Enter <factor>",
            "Enter <number>",
            "Next token is: 2",
            "Next lexeme is: +",
            "Exit <number>",
            "Exit <factor>",
            "Enter <term_prime>",
            "Exit <term_prime>",
            "Exit <term>",
            "Enter <expr_prime>",
            "Enter <term>",
            "Enter <factor>",
            "Enter <number>",
            "Next token is: 3",
            "Next lexeme is: *",
            "Exit <number>",
            "Exit <factor>",
            "Enter <term_prime>",
            "Enter <factor>",
            "Enter <number>",
            "Next token is: 4",
            "Next lexeme is: EOS",
            "Exit <number>",
            "Exit <factor>",
            "Enter <term_prime>",
            "Exit <term_prime>",
            "Exit <term_prime>",
            "Exit <term>",
            "Enter <expr_prime>",
            "Exit <expr_prime>",
            "Exit <expr_prime>",
            "Exit <expr>",
        ]
    );
}

/// Returns the open productions at the moment `line` was traced.
fn stack_at<'a>(trace: &'a [String], line: &str) -> Vec<&'a str> {
    let mut stack = Vec::new();
    for entry in trace {
        if entry == line {
            return stack;
        }
        if let Some(production) = entry.strip_prefix("Enter ") {
            stack.push(production);
        } else if entry.starts_with("Exit ") {
            stack.pop();
        }
    }
    panic!("{line:?} never traced");
}

#[test]
fn multiplication_is_consumed_below_addition() {
    let (_, recorder) = run("1*2+3*4");

    assert_eq!(
        stack_at(recorder.trace(), "Next token is: 2"),
        vec!["<expr>", "<term>", "<term_prime>", "<factor>", "<number>"]
    );
    assert_eq!(
        stack_at(recorder.trace(), "Next token is: 4"),
        vec!["<expr>", "<expr_prime>", "<term>", "<term_prime>", "<factor>", "<number>"]
    );
}

#[test]
fn balanced_parens_are_accepted() {
    let (summary, recorder) = run("(1+2)*3");

    assert_eq!(summary.statuses(), &[Status::Clean]);
    assert!(recorder.diagnostics().is_empty());
    assert_eq!(recorder.trace()[3], "Next lexeme is: (");
}

#[test]
fn unbalanced_parens_are_rejected_once() {
    let (summary, recorder) = run("(1+2*3");

    assert_eq!(summary.statuses(), &[Status::Errored]);
    assert_eq!(
        recorder.diagnostics(),
        &["Syntax error on token EOS, \"R_PAREN\" expected [Line 1, Col 7]"]
    );
}

#[test]
fn missing_operands_are_reported_and_skipped() {
    let (summary, recorder) = run("1+) 2");

    assert_eq!(summary.statuses(), &[Status::Errored, Status::Clean]);
    assert_eq!(
        recorder.diagnostics(),
        &["Syntax error on token ), \"INT_LITERAL\" expected [Line 1, Col 4]"]
    );

    // the echo is silenced after the error, and comes back with the next expression
    let echoes: Vec<_> = recorder
        .trace()
        .iter()
        .filter(|line| line.starts_with("Next"))
        .collect();
    assert_eq!(
        echoes,
        vec!["Next token is: 1", "Next lexeme is: +", "Next token is: 2", "Next lexeme is: EOS"]
    );
}

#[test]
fn nested_expressions_echo_again_after_an_error() {
    let (summary, recorder) = run("1 + * - (2) + 3");

    // the whole expression stays rejected
    assert_eq!(summary.statuses(), &[Status::Errored]);
    assert_eq!(
        recorder.diagnostics(),
        &["Syntax error on token *, \"INT_LITERAL\" expected [Line 1, Col 6]"]
    );

    // the echo comes back inside the parens, and goes quiet again after them
    let echoes: Vec<_> = recorder
        .trace()
        .iter()
        .filter(|line| line.starts_with("Next"))
        .collect();
    assert_eq!(
        echoes,
        vec![
            "Next token is: 1",
            "Next lexeme is: +",
            "Next token is: 2",
            "Next lexeme is: )"
        ]
    );
}

#[test]
fn errors_inside_nested_expressions_reach_the_top_level() {
    let (summary, recorder) = run("((1 2))");

    assert_eq!(summary.statuses(), &[Status::Errored]);
    assert_eq!(
        recorder.diagnostics(),
        &["Syntax error on token 2, \"R_PAREN\" expected [Line 1, Col 6]"]
    );
}

#[test]
fn expressions_need_no_separator() {
    let (summary, recorder) = run("1+1 2+2");

    assert_eq!(summary.statuses(), &[Status::Clean, Status::Clean]);
    let roots = recorder
        .trace()
        .iter()
        .filter(|line| *line == "Enter <expr>")
        .count();
    assert_eq!(roots, 2);
}

#[test]
fn lines_form_one_stream() {
    let mut parser = Parser::new(Lexer::new(["1 +", "2", "* 3"]), Recorder::default());
    let summary = parser.parse();

    assert_eq!(summary.statuses(), &[Status::Clean]);
    assert!(parser.current().is(TokenType::EndOfStream));
}

#[test]
fn unary_minus_takes_a_whole_expression() {
    let (summary, recorder) = run("-(4) - -5 * 2");
    assert!(summary.is_accepted());
    assert_eq!(summary.expressions(), 1);

    // each unary minus opens a nested <expr> that swallows the rest of the line
    assert_eq!(
        stack_at(recorder.trace(), "Next token is: 2"),
        vec![
            "<expr>",
            "<term>",
            "<factor>",
            "<expr>",
            "<expr_prime>",
            "<term>",
            "<factor>",
            "<expr>",
            "<term>",
            "<term_prime>",
            "<factor>",
            "<number>"
        ]
    );
}

#[test]
fn dangling_operators_reach_end_of_stream() {
    let (summary, recorder) = run("7 /");

    assert_eq!(summary.statuses(), &[Status::Errored]);
    assert_eq!(
        recorder.diagnostics(),
        &["Syntax error on token EOS, \"INT_LITERAL\" expected [Line 1, Col 4]"]
    );
}
