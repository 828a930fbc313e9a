//! Performance benchmarks for mdpage
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

See [a link](https://example.com).
"#;

    pub const MEDIUM: &str = r#"# Data Permission Management

This document describes the permission model.

## Roles

| Role | Scope | Notes |
|------|-------|-------|
| admin | all | full access |
| auditor | read | **no** writes |

### Code Example

```java
@DataPermission(scope = "dept")
public List<User> listUsers() {
    return userMapper.selectList(null);
}
```

1. Resolve the current user
2. Build the scope filter
3. Apply it to the query

![architecture](img/architecture.png)

Thank you for reading!
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains inline elements like *emphasis*, **strong**,
and [links](https://example.com).

- First bullet point with **bold** text
- Second bullet point with *italic* text

| a | b |
|---|---|
| 1 | 2 |

```rust
fn example() {
    let x = 42;
    println!("{}", x);
}
```

Another paragraph to add some content.

"#;
        section.repeat(50)
    }

    /// Many unmatched delimiters on one line
    pub fn pathological_emphasis() -> String {
        "*a ".repeat(1000) + &"[b] ".repeat(1000)
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| b.iter(|| mdpage::to_html(black_box(samples::TINY))));

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| b.iter(|| mdpage::to_html(black_box(samples::SMALL))));

    group.throughput(Throughput::Bytes(samples::MEDIUM.len() as u64));
    group.bench_function("medium", |b| b.iter(|| mdpage::to_html(black_box(samples::MEDIUM))));

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| b.iter(|| mdpage::to_html(black_box(&large))));

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large_page", |b| b.iter(|| mdpage::to_document(black_box(&large))));

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let emphasis = samples::pathological_emphasis();
    group.throughput(Throughput::Bytes(emphasis.len() as u64));
    group.bench_function("unmatched_delimiters", |b| {
        b.iter(|| mdpage::to_html(black_box(&emphasis)))
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_document, bench_pathological);
criterion_main!(benches);
