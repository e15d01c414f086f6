//! Performance benchmarks for jobglean.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks cover:
//! - Full posting extraction on a small synthetic page (~2KB)
//! - Keyword extraction on short and repeated description text
//! - Coverage aggregation over an extracted keyword list

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jobglean::{compute_coverage, extract_job_posting_from_html, extract_keywords};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Senior Platform Engineer at Initrode | Careers</title>
    <meta property="og:site_name" content="Initrode">
    <script type="application/ld+json">
    {
      "@context": "https://schema.org/",
      "@type": "JobPosting",
      "title": "Senior Platform Engineer",
      "hiringOrganization": {"@type": "Organization", "name": "Initrode"},
      "jobLocation": {"@type": "Place", "address": {"addressLocality": "Austin", "addressRegion": "TX"}},
      "baseSalary": {"@type": "MonetaryAmount", "currency": "USD",
                     "value": {"minValue": 150000, "maxValue": 190000, "unitText": "YEAR"}},
      "description": "<p>Own our Kubernetes platform and the Terraform that provisions it.</p>"
    }
    </script>
</head>
<body>
    <nav><a href="/">Home</a><a href="/careers">Careers</a></nav>
    <h1 class="job-title">Senior Platform Engineer</h1>
    <div class="job-description">
        <p>We run hundreds of services on Kubernetes across three regions. You will
        own the platform layer: Terraform modules, the deployment pipeline, and the
        observability stack built on Prometheus and Grafana.</p>
        <p>Requirements: 5+ years of experience, deep Linux knowledge, and strong
        Python or Go. Nice to have: Rust and PostgreSQL internals.</p>
    </div>
    <footer><p>Copyright 2025</p></footer>
</body>
</html>
"#;

const SAMPLE_DESCRIPTION: &str = "\
We run hundreds of services on Kubernetes across three regions. You will own the \
platform layer: Terraform modules, the deployment pipeline, and the observability \
stack built on Prometheus and Grafana. Requirements: 5+ years of experience, deep \
Linux knowledge, and strong Python or Go. Nice to have: Rust and PostgreSQL internals. \
Bachelor's degree in Computer Science or equivalent practical experience.";

fn bench_extract_posting(c: &mut Criterion) {
    c.bench_function("extract_job_posting_from_html", |b| {
        b.iter(|| {
            extract_job_posting_from_html(
                black_box(SAMPLE_HTML),
                black_box("https://initrode.example/careers/42"),
            )
        });
    });
}

fn bench_extract_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_keywords");
    for repeats in [1usize, 8, 32] {
        let description = SAMPLE_DESCRIPTION.repeat(repeats);
        group.throughput(Throughput::Bytes(description.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}B", description.len())),
            &description,
            |b, description| {
                b.iter(|| extract_keywords(black_box(description)));
            },
        );
    }
    group.finish();
}

fn bench_compute_coverage(c: &mut Criterion) {
    let mut keywords = extract_keywords(SAMPLE_DESCRIPTION);
    for (idx, keyword) in keywords.iter_mut().enumerate() {
        keyword.addressed = idx % 2 == 0;
    }

    c.bench_function("compute_coverage", |b| {
        b.iter(|| compute_coverage(black_box(&keywords)));
    });
}

criterion_group!(
    benches,
    bench_extract_posting,
    bench_extract_keywords,
    bench_compute_coverage
);
criterion_main!(benches);
