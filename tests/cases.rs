use std::fs;

use uselesscalc::evaluate;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (input, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = evaluate(&input).to_string();
            assert_eq!(actual,
                       expected,
                       "case {} in {:?} failed for input {:?}",
                       i + 1,
                       path,
                       input);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(input, expected)| (input.to_string(), expected.trim().to_string()))
           .collect()
}
