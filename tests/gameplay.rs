// Integration tests for whole rounds played against the embedded word list

use std::io::Cursor;
use wordle_game::commands::{CheckStep, check_guesses, run_play};
use wordle_game::core::{Feedback, GameError, LetterResult};
use wordle_game::game::{FixedPicker, NUM_GUESSES, RandomPicker, Session, Status};
use wordle_game::wordlists::loader::embedded_corpus;

#[test]
fn test_every_embedded_word_scores_itself_perfect() {
    let corpus = embedded_corpus().unwrap();

    for word in corpus.words() {
        let feedback = Feedback::calculate(word, word).unwrap();
        assert!(feedback.is_perfect(), "{word} did not match itself");
    }
}

#[test]
fn test_speed_against_abide() {
    let corpus = embedded_corpus().unwrap();
    let result = check_guesses(&corpus, "abide", &["speed".to_string()], NUM_GUESSES).unwrap();

    let CheckStep::Accepted { record, status } = &result.steps[0] else {
        panic!("speed should be accepted");
    };
    assert_eq!(
        record.feedback().results(),
        &[
            LetterResult::Miss,
            LetterResult::Miss,
            LetterResult::Present,
            LetterResult::Miss,
            LetterResult::Present,
        ]
    );
    assert_eq!(*status, Status::InProgress);
}

#[test]
fn test_seeded_sessions_pick_same_secret() {
    let corpus = embedded_corpus().unwrap();
    let mut a = Session::new(&corpus, RandomPicker::seeded(2024)).unwrap();
    let mut b = Session::new(&corpus, RandomPicker::seeded(2024)).unwrap();

    // Play until both lose; the revealed secrets must agree
    for guess in ["crane", "slate", "pound", "motor", "speed", "alloy"] {
        let _ = a.submit_guess(guess);
        let _ = b.submit_guess(guess);
    }
    assert_eq!(a.status(), b.status());
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_full_round_bookkeeping() {
    let corpus = embedded_corpus().unwrap();
    let secret = corpus.index_of("loyal").unwrap();
    let mut session = Session::new(&corpus, FixedPicker::always(secret)).unwrap();

    let (record, status) = session.submit_guess("ALLOY").unwrap();
    assert_eq!(record.feedback().count_presents(), 5);
    assert_eq!(status, Status::InProgress);

    assert!(matches!(
        session.submit_guess("xyzzy"),
        Err(GameError::NotInCorpus(_))
    ));
    assert_eq!(session.attempts_remaining(), NUM_GUESSES - 1);

    let (_, status) = session.submit_guess("loyal").unwrap();
    assert_eq!(status, Status::Won);
    assert_eq!(session.revealed_secret().map(|w| w.text()), Some("loyal"));
    assert_eq!(
        session.submit_guess("crane"),
        Err(GameError::GameAlreadyOver(Status::Won))
    );

    session.reset(&corpus).unwrap();
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.attempts_remaining(), NUM_GUESSES);
    assert!(session.history().is_empty());
}

#[test]
fn test_play_loop_two_rounds() {
    let corpus = embedded_corpus().unwrap();
    let first = corpus.index_of("crane").unwrap();
    let second = corpus.index_of("stone").unwrap();
    let mut session = Session::new(&corpus, FixedPicker::new(vec![first, second])).unwrap();

    let script = "slate\ncrane\nyes\nplate\nstone\nno\n";
    let stats = run_play(&mut session, Cursor::new(script)).unwrap();

    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.games_won, 2);
    assert_eq!(stats.guess_distribution[2], 2);
}

#[test]
fn test_play_loop_losing_round() {
    let corpus = embedded_corpus().unwrap();
    let secret = corpus.index_of("crane").unwrap();
    let mut session = Session::new(&corpus, FixedPicker::always(secret)).unwrap();

    let script = "slate\nplate\nstone\npound\nmotor\nspeed\n";
    let stats = run_play(&mut session, Cursor::new(script)).unwrap();

    assert_eq!(session.status(), Status::Lost);
    assert_eq!(session.attempts_remaining(), 0);
    assert_eq!(stats.total_games, 1);
    assert_eq!(stats.games_won, 0);
}
