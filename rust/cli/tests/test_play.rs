use blackjack_cli::run;
use serial_test::serial;

/// Scoped override of the scripted-stdin env var used by the play command.
struct TestInput;

impl TestInput {
    fn set(script: &str) -> Self {
        unsafe { std::env::set_var("BLACKJACK_TEST_INPUT", script) };
        TestInput
    }
}

impl Drop for TestInput {
    fn drop(&mut self) {
        unsafe { std::env::remove_var("BLACKJACK_TEST_INPUT") };
    }
}

fn play_with_input(script: &str, args: &[&str]) -> (i32, String, String) {
    let _input = TestInput::set(script);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn session_messages_appear_in_contract_order() {
    let (code, stdout, _) = play_with_input(
        "s\n",
        &["blackjack", "play", "--seed", "42", "--delay-ms", "0"],
    );
    assert_eq!(code, 0);

    let shuffle = stdout.find("Shuffling cards..").unwrap();
    let deal = stdout.find("Dealing cards..").unwrap();
    let prompt = stdout.find("Will you hit (h) or stand (s)?").unwrap();
    let reveal = stdout.find("The dealer reveals the hole card!").unwrap();
    let dealer_total = stdout.find("Dealer card value:").unwrap();
    let player_total = stdout.find("Your card value:").unwrap();

    assert!(shuffle < deal);
    assert!(deal < prompt);
    assert!(prompt < reveal);
    assert!(reveal < dealer_total);
    assert!(dealer_total < player_total);
}

#[test]
#[serial]
fn board_is_shown_before_every_prompt() {
    let (code, stdout, _) = play_with_input(
        "s\n",
        &["blackjack", "play", "--seed", "42", "--delay-ms", "0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Cards left: 48"));
    assert!(stdout.contains("Dealer's cards: 2"));
    assert!(stdout.contains("Your cards:"));
    assert!(stdout.contains("〚Face Down〛"));
}

#[test]
#[serial]
fn invalid_input_reprompts_and_round_still_completes() {
    let (code, stdout, _) = play_with_input(
        "hit me\ns\n",
        &["blackjack", "play", "--seed", "42", "--delay-ms", "0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Invalid choice."));
    assert_eq!(stdout.matches("Will you hit (h) or stand (s)?").count(), 2);
    assert!(stdout.contains("Your card value:"));
}

#[test]
#[serial]
fn quit_token_is_rejected_and_reprompts() {
    let (code, stdout, _) = play_with_input(
        "q\ns\n",
        &["blackjack", "play", "--seed", "42", "--delay-ms", "0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Invalid choice."));
    assert!(!stdout.contains("Session ended."));
    assert!(stdout.contains("Your card value:"));
}

#[test]
#[serial]
fn end_of_input_ends_the_session_without_an_outcome() {
    let (code, stdout, _) = play_with_input(
        "",
        &["blackjack", "play", "--seed", "42", "--delay-ms", "0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Session ended."));
    assert!(!stdout.contains("Dealer card value:"));
}

#[test]
#[serial]
fn seeded_sessions_are_reproducible() {
    let (code1, stdout1, _) = play_with_input(
        "s\n",
        &["blackjack", "play", "--seed", "7", "--delay-ms", "0"],
    );
    let (code2, stdout2, _) = play_with_input(
        "s\n",
        &["blackjack", "play", "--seed", "7", "--delay-ms", "0"],
    );
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(stdout1, stdout2);
}

#[test]
#[serial]
fn log_flag_records_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, _, _) = play_with_input(
        "s\n",
        &[
            "blackjack",
            "play",
            "--seed",
            "42",
            "--delay-ms",
            "0",
            "--log",
            path_str,
        ],
    );
    assert_eq!(code, 0);

    let contents = std::fs::read_to_string(&path).unwrap();
    let record: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(record["seed"], 42);
    assert!(record["round_id"].as_str().unwrap().contains('-'));
    assert!(record["outcome"]["result"].is_string());
    assert!(record["ts"].is_string());
}

#[test]
#[serial]
fn log_file_accumulates_records_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_str().unwrap();
    let args = [
        "blackjack",
        "play",
        "--seed",
        "42",
        "--delay-ms",
        "0",
        "--log",
        path_str,
    ];

    let (code1, _, _) = play_with_input("s\n", &args);
    let (code2, _, _) = play_with_input("s\n", &args);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);

    let contents = std::fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = contents
        .lines()
        .map(|l| {
            let record: serde_json::Value = serde_json::from_str(l).unwrap();
            record["round_id"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}
