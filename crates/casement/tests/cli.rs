use std::process::{Command, Output};

fn casement(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_casement"))
        .args(args)
        .output()
        .expect("failed to execute casement")
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = casement(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("window placement"));
}

#[test]
fn version_exits_successfully() {
    // Act
    let output = casement(&["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("casement"));
}

#[test]
fn span_covers_side_by_side_displays() {
    // Act
    let output = casement(&[
        "span",
        "--work-area",
        "0,0,1920,1040",
        "--work-area",
        "1920,0,2560,1400",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "0,0,4480,1040");
}

#[test]
fn span_accepts_negative_coordinates() {
    // Act
    let output = casement(&[
        "span",
        "--work-area",
        "-1280,0,1280,984",
        "--work-area",
        "0,0,1920,1040",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "-1280,0,3200,984");
}

#[test]
fn span_with_single_display_fails() {
    // Act
    let output = casement(&["span", "--work-area", "0,0,1920,1040"]);

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least two displays"));
}

#[test]
fn span_rejects_malformed_work_area() {
    // Act
    let output = casement(&["span", "--work-area", "0,0,1920"]);

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("x,y,width,height"));
}

#[test]
fn span_clamps_work_area_at_coordinate_limit() {
    // Act
    let output = casement(&[
        "span",
        "--work-area",
        "2147483000,0,2000,10",
        "--work-area",
        "0,0,10,10",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "0,0,2147483647,10");
}

#[test]
fn restore_keeps_visible_bounds() {
    // Act
    let output = casement(&[
        "restore",
        "--rect",
        "100,100,800,600",
        "--state",
        "maximized",
        "--work-area",
        "0,0,1920,1040",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "exact 100,100,800,600, then maximized");
}

#[test]
fn restore_falls_back_when_display_is_gone() {
    // Act
    let output = casement(&[
        "restore",
        "--rect",
        "2500,100,800,600",
        "--work-area",
        "0,0,1920,1040",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "default location, size 800x600");
}

#[test]
fn restore_rejects_unknown_state() {
    // Act
    let output = casement(&[
        "restore",
        "--rect",
        "0,0,800,600",
        "--state",
        "fullscreen",
        "--work-area",
        "0,0,1920,1040",
    ]);

    // Assert
    assert!(!output.status.success());
}

#[test]
fn restore_treats_rect_at_coordinate_limit_as_off_screen() {
    // Act
    let output = casement(&[
        "restore",
        "--rect",
        "2147483000,0,2000,1000",
        "--work-area",
        "0,0,1920,1040",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "default location, size 2000x1000");
}
