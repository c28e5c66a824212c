use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{read_test_log, rh, setup_test_log, write_test_log};

#[test]
fn test_status_is_the_default_mode() {
    let log = write_test_log("cli_default_status", "WAGE_SET,20\nBEGIN,0\nEND,3600\nPAYMENT,15\n");

    rh("cli_default_status")
        .args(["--log", &log])
        .assert()
        .success()
        .stdout(contains("Not in a shift"))
        .stdout(contains("Pending: $5.00"));
}

#[test]
fn test_status_hides_balance_when_settled() {
    let log = write_test_log("cli_settled", "WAGE_SET,10\nBEGIN,0\nEND,3600\nPAYMENT,10.005\n");

    rh("cli_settled")
        .args(["--log", &log, "--status"])
        .assert()
        .success()
        .stdout(contains("Not in a shift"))
        .stdout(contains("Pending").not())
        .stdout(contains("Overpaid").not());
}

#[test]
fn test_status_shows_overpaid() {
    let log = write_test_log("cli_overpaid", "WAGE_SET,10\nPAYMENT,12.5\n");

    rh("cli_overpaid")
        .args(["--log", &log, "-s"])
        .assert()
        .success()
        .stdout(contains("Overpaid: $12.50"));
}

#[test]
fn test_begin_then_end_cycle() {
    let log = write_test_log("cli_cycle", "WAGE_SET,10\n");

    rh("cli_cycle")
        .args(["--log", &log, "--begin"])
        .assert()
        .success()
        .stdout(contains("Shift started"));

    rh("cli_cycle")
        .args(["--log", &log, "-s"])
        .assert()
        .success()
        .stdout(contains("In a shift for"));

    rh("cli_cycle")
        .args(["--log", &log, "-e"])
        .assert()
        .success()
        .stdout(contains("Shift ended"));

    let contents = read_test_log(&log);
    let kinds: Vec<&str> = contents
        .lines()
        .map(|l| l.split(',').next().unwrap_or(""))
        .collect();
    assert_eq!(kinds, vec!["WAGE_SET", "BEGIN", "END"]);
}

#[test]
fn test_double_begin_exits_with_code_3() {
    let log = write_test_log("cli_double_begin", "WAGE_SET,10\nBEGIN,1000\n");

    rh("cli_double_begin")
        .args(["--log", &log, "--begin"])
        .assert()
        .code(3)
        .stderr(contains("Cannot begin a shift while one is ongoing."));

    assert_eq!(read_test_log(&log), "WAGE_SET,10\nBEGIN,1000\n");
}

#[test]
fn test_end_without_shift_exits_with_code_3() {
    let log = write_test_log("cli_lonely_end", "WAGE_SET,10\n");

    rh("cli_lonely_end")
        .args(["--log", &log, "--end"])
        .assert()
        .code(3)
        .stderr(contains("Cannot end a shift when none is ongoing."));
}

#[test]
fn test_corrupt_log_exits_with_code_3_and_names_path() {
    let log = write_test_log("cli_corrupt", "WAGE_SET,10\nBEGIN,100\nBEGIN,200\n");

    rh("cli_corrupt")
        .args(["--log", &log])
        .assert()
        .code(3)
        .stderr(contains("double begin"))
        .stderr(contains(log.as_str()));
}

#[test]
fn test_negative_payment_rejected_before_core() {
    let log = write_test_log("cli_negative_payment", "WAGE_SET,10\n");

    rh("cli_negative_payment")
        .args(["--log", &log, "--payment", "-5"])
        .assert()
        .code(2)
        .stderr(contains("must not be negative"));

    assert_eq!(read_test_log(&log), "WAGE_SET,10\n");
}

#[test]
fn test_negative_wage_rejected_before_core() {
    let log = write_test_log("cli_negative_wage", "WAGE_SET,10\n");

    rh("cli_negative_wage")
        .args(["--log", &log, "-w", "-1"])
        .assert()
        .code(2);
}

#[test]
fn test_modes_are_mutually_exclusive() {
    let log = write_test_log("cli_exclusive", "WAGE_SET,10\n");

    rh("cli_exclusive")
        .args(["--log", &log, "--begin", "--end"])
        .assert()
        .code(2);
}

#[test]
fn test_payment_and_wage_are_appended() {
    let log = write_test_log("cli_payment_wage", "WAGE_SET,10\n");

    rh("cli_payment_wage")
        .args(["--log", &log, "-p", "42.5"])
        .assert()
        .success()
        .stdout(contains("Payment of $42.50 recorded"))
        .stdout(contains("Overpaid: $42.50"));

    rh("cli_payment_wage")
        .args(["--log", &log, "--wage", "15"])
        .assert()
        .success()
        .stdout(contains("Hourly wage set to $15.00 (was $10.00)"));

    assert_eq!(read_test_log(&log), "WAGE_SET,10\nPAYMENT,42.5\nWAGE_SET,15\n");
}

#[test]
fn test_first_run_prompts_for_wage() {
    let log = setup_test_log("cli_first_run");

    rh("cli_first_run")
        .args(["--log", &log])
        .write_stdin("13.45\n")
        .assert()
        .success()
        .stdout(contains("Hourly wage"))
        .stdout(contains("$13.45"))
        .stdout(contains("Not in a shift"));

    assert_eq!(read_test_log(&log), "WAGE_SET,13.45\n");
}

#[test]
fn test_first_run_rejects_garbage_wage() {
    let log = setup_test_log("cli_first_run_garbage");

    rh("cli_first_run_garbage")
        .args(["--log", &log])
        .write_stdin("a lot\n")
        .assert()
        .code(1)
        .stderr(contains("Invalid input"));

    assert_eq!(read_test_log(&log), "");
}

#[test]
fn test_bitbar_output() {
    let log = write_test_log("cli_bitbar", "WAGE_SET,20\nBEGIN,0\nEND,3600\nPAYMENT,15\n");

    rh("cli_bitbar")
        .args(["--log", &log, "--bitbar"])
        .assert()
        .success()
        .stdout(contains("| color=red"))
        .stdout(contains("Payment since last paycheck: $5.00"))
        .stdout(contains("Shift not ongoing"))
        .stdout(contains("Start Shift | bash="))
        .stdout(contains("param1=--begin"))
        .stdout(contains(log.as_str()))
        .stdout(contains("End Shift").not());
}

#[test]
fn test_bitbar_offers_end_during_shift() {
    let log = write_test_log("cli_bitbar_in_shift", "WAGE_SET,20
");

    rh("cli_bitbar_in_shift")
        .args(["--log", &log, "--begin"])
        .assert()
        .success();

    rh("cli_bitbar_in_shift")
        .args(["--log", &log, "--bitbar"])
        .assert()
        .success()
        .stdout(contains("| color=green"))
        .stdout(contains("End Shift | bash="))
        .stdout(contains("param1=--end"))
        .stdout(contains("Start Shift").not());
}

#[test]
fn test_non_utf8_log_exits_with_code_3() {
    let log = setup_test_log("cli_non_utf8");
    std::fs::write(&log, b"WAGE_SET,10\nBEG\xffIN,100\n").unwrap();

    rh("cli_non_utf8")
        .args(["--log", &log])
        .assert()
        .code(3)
        .stderr(contains("unknown event kind"))
        .stderr(contains("line 2"));
}

#[test]
fn test_bitbar_never_prompts() {
    let log = setup_test_log("cli_bitbar_unconfigured");

    rh("cli_bitbar_unconfigured")
        .args(["--log", &log, "--bitbar"])
        .assert()
        .success()
        .stdout(contains("Not configured"));

    assert_eq!(read_test_log(&log), "");
}

#[test]
fn test_clear_requires_confirmation() {
    let log = write_test_log("cli_clear", "WAGE_SET,10\n");

    rh("cli_clear")
        .args(["--log", &log, "--clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(read_test_log(&log), "WAGE_SET,10\n");

    rh("cli_clear")
        .args(["--log", &log, "--clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted"));
    assert!(!std::path::Path::new(&log).exists());
}

#[test]
fn test_clear_with_yes_skips_prompt() {
    let log = write_test_log("cli_clear_yes", "WAGE_SET,10\n");

    rh("cli_clear_yes")
        .args(["--log", &log, "--clear", "--yes"])
        .assert()
        .success();
    assert!(!std::path::Path::new(&log).exists());
}

#[test]
fn test_config_prints_effective_log_path() {
    let log = setup_test_log("cli_config");

    rh("cli_config")
        .args(["--log", &log, "--config"])
        .assert()
        .success()
        .stdout(contains("log_file"))
        .stdout(contains(log.as_str()))
        .stdout(contains("currency"));
}
