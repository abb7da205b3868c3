use std::fs;
use std::path::Path;

/// Served when the frontend has not been built with `trunk build` yet, so the
/// API stays usable and `include_dir!` always has a directory to embed.
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Mental Health Dashboard</title></head>
<body>
<h1>🧠 Mental Health Dashboard</h1>
<p>The web frontend has not been built. Run <code>trunk build --release</code> in
<code>frontend/</code> and rebuild the backend. The JSON API is available under <code>/api</code>.</p>
</body>
</html>
"#;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else {
        let embedded = out_dir.join("dist");
        let index = embedded.join("index.html");
        if !index.exists() {
            fs::create_dir_all(&embedded).unwrap();
            fs::write(&index, FALLBACK_INDEX).unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
