#![feature(test)]

extern crate test;

mod common {
    include!("../tests/common/mod.rs");
}

use common::REGEX_IPV4_PATTERN;
use core::net::Ipv4Addr;
use regex::Regex;
use test::Bencher;

const INPUTS: [&str; 12] = [
    "192.168.1.1",
    "0.0.0.0",
    "255.255.255.255",
    "66.249.64.13",
    "216.58.214.14",
    "256.1.1.1",
    "192.168.01.1",
    "1.2.3",
    ".1.2.3.4",
    "192.168.a.1",
    "",
    "255.240.111.255.1",
];

fn dotquad_valid_count() -> usize {
    INPUTS
        .iter()
        .filter(|s| dotquad::is_valid_ipv4_address(**s))
        .count()
}

fn regex_valid_count(re: &Regex) -> usize {
    INPUTS.iter().filter(|s| re.is_match(s)).count()
}

fn ipv4_addr_valid_count() -> usize {
    INPUTS
        .iter()
        .filter(|s| s.parse::<Ipv4Addr>().is_ok())
        .count()
}

#[test]
fn dotquad_count_eq_regex_count() {
    assert_eq!(
        dotquad_valid_count(),
        regex_valid_count(&Regex::new(REGEX_IPV4_PATTERN).unwrap())
    );
}

#[test]
fn dotquad_count_eq_ipv4_addr_count() {
    assert_eq!(dotquad_valid_count(), ipv4_addr_valid_count());
}

#[bench]
fn dotquad_validate(b: &mut Bencher) {
    b.iter(dotquad_valid_count);
}

#[bench]
fn regex_compile_per_iter(b: &mut Bencher) {
    b.iter(|| regex_valid_count(&Regex::new(REGEX_IPV4_PATTERN).unwrap()));
}

#[bench]
fn regex_precompiled(b: &mut Bencher) {
    let re = Regex::new(REGEX_IPV4_PATTERN).unwrap();
    b.iter(|| regex_valid_count(&re));
}

#[bench]
fn ipv4_addr_parse(b: &mut Bencher) {
    b.iter(ipv4_addr_valid_count);
}
