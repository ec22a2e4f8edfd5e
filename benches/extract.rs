// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tapwatch::{diff, extract};

/// A menu about the size of a busy tap list.
fn synthetic_menu(n: usize) -> String {
    let mut doc = String::from("<html><body><div class=\"menu-items\">");
    for i in 0..n {
        doc.push_str(&format!(
            r#"<div class="menu-item">
                 <div class="menu-item-title">Beer {i}{star}</div>
                 <div class="menu-item-description">Batch {i}, hops<br>and more hops</div>
                 {option}
                 <div class="menu-item-price-top">
                   <span class="currency-sign">£</span>{abv:.1}
                 </div>
               </div>"#,
            star = if i % 3 == 0 { "*" } else { "" },
            option = if i % 4 == 0 {
                r#"<div class="menu-item-option">2/3 pint</div>"#
            } else {
                ""
            },
            abv = 3.0 + (i % 90) as f64 / 10.0,
        ));
    }
    doc.push_str("</div></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_menu(40);

    c.bench_function("extract_menu_40", |b| {
        b.iter(|| {
            let beers = extract::extract(black_box(&doc)).unwrap();
            black_box(beers.len())
        })
    });

    let new = extract::extract(&doc).unwrap();
    let mut previous = new.clone();
    previous.retain(|name, _| !name.ends_with('7'));

    c.bench_function("compare_menu_40", |b| {
        b.iter(|| {
            let cmp = diff::compare(black_box(&new), Some(black_box(&previous)));
            black_box(cmp.changed)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
