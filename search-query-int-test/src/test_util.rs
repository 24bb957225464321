use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Word;
use fake::Fake;
use search_query::errors::QueryResult;
use search_query::QueryBuilder;
use std::backtrace::Backtrace;
use std::time::Instant;

/// Runs a fallible test body and reports errors and panics with a backtrace.
pub fn run_test<T>(test: T)
where
    T: Fn() -> QueryResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();
    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        test().map_err(|e| (format!("Test failed: {:?}", e), backtrace.to_string()))
    });
    let elapsed = start_time.elapsed();

    let (error, backtrace) = match result {
        Ok(Ok(_)) => return,
        Ok(Err((e, bt))) => (e, bt),
        Err(panic_err) => {
            let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            (format!("Panic: {}", err_msg), Backtrace::capture().to_string())
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}", elapsed);
    eprintln!("Error: {}", error);
    if !backtrace.is_empty() && !backtrace.contains("disabled") {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
    eprintln!("=====================================================\n");

    panic!("{}", error);
}

/// Asserts that `builder` renders `expected`, twice, without changing.
pub fn assert_renders(builder: &QueryBuilder, expected: &str) {
    let first = builder.build();
    assert_eq!(first, expected);
    assert_eq!(builder.build(), first, "rendering must be repeatable");
}

pub fn random_email() -> String {
    FreeEmail().fake()
}

/// A random word of at least three characters, usable with `contains`.
pub fn random_substring() -> String {
    loop {
        let word: String = Word().fake();
        if word.chars().count() >= 3 {
            return word;
        }
    }
}

/// A random field name made of lowercase letters and underscores.
pub fn random_field_name() -> String {
    let word: String = Word().fake();
    word.to_lowercase().replace(|c: char| !c.is_ascii_alphabetic(), "_")
}
