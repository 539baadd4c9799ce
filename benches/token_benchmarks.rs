use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use trincashop::auth::{check_expiry, decode_claims};

fn sample_token() -> String {
    let claims = json!({
        "sub": "admin@trincashop.com",
        "iat": 1516239022,
        "exp": 4102444800i64,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"bench-secret"),
    )
    .unwrap()
}

fn bench_decode_claims(c: &mut Criterion) {
    let token = sample_token();

    c.bench_function("decode_claims", |b| {
        b.iter(|| decode_claims(black_box(&token)))
    });
}

fn bench_check_expiry(c: &mut Criterion) {
    let token = sample_token();

    c.bench_function("check_expiry_valid", |b| {
        b.iter(|| check_expiry(black_box(&token)))
    });

    c.bench_function("check_expiry_garbage", |b| {
        b.iter(|| check_expiry(black_box("not-a-token")))
    });
}

criterion_group!(benches, bench_decode_claims, bench_check_expiry);
criterion_main!(benches);
