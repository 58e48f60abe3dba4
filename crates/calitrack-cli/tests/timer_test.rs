mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_timer_counts_down_and_finishes() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["timer", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest over"));
}

#[test]
fn test_timer_uses_first_config_preset() {
    let fixture = TestFixture::new();
    fixture.write_config("rest_presets = [1, 60]\n");

    fixture
        .cmd()
        .arg("timer")
        .assert()
        .success()
        .stdout(predicate::str::contains("1s remaining"));
}
