/// Render the comment banner placed above a subprogram declaration:
///
/// ```text
/// ---------
/// -- Foo --
/// ---------
/// ```
///
/// Every banner line carries the declaration's indentation; a blank line
/// separates the banner from the declaration.
pub fn subprogram_banner(name: &str, indentation: &str, eol: &str) -> String {
    let rule = format!("---{}---", "-".repeat(name.len()));
    format!(
        "{indentation}{rule}{eol}{indentation}-- {name} --{eol}{indentation}{rule}{eol}{eol}"
    )
}
