use anyhow::Result;
use icon_resize::icon_set::IconSet;

fn main() -> Result<()> {
    let set = IconSet::builtin()?;
    let mut failures = 0;

    println!("Checking icons in: {}", set.dir.display());

    for (size, path) in set.outputs() {
        let img = match image::open(&path) {
            Ok(img) => img,
            Err(err) => {
                println!("✗ {}: {err}", path.display());
                failures += 1;
                continue;
            }
        };

        let (width, height) = (img.width(), img.height());
        let has_alpha = img.color().has_alpha();

        if width == size && height == size && has_alpha {
            println!("✓ {} is {width}x{height} with alpha", path.display());
        } else {
            println!(
                "⚠ {}: expected {size}x{size} with alpha, found {width}x{height} ({:?})",
                path.display(),
                img.color()
            );
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} icon(s) failed verification");
    }

    Ok(())
}
