// src/demo_cli.rs
// Stdin/stdout demos of the library operations - separated to avoid polluting main.rs

use std::error::Error;
use std::io::Read;

use log::info;

use contest_math::config::MathConfig;
use contest_math::core::error::MathError;
use contest_math::integer_math::combinatorics::{ncr_direct, FactorialTable};
use contest_math::integer_math::factorization::FactorTable;
use contest_math::integer_math::gcd::GCD;
use contest_math::integer_math::modular::Modular;
use contest_math::integer_math::prime_sieve::PrimeSieve;

pub fn run(args: &[String], config: &MathConfig) -> Result<(), Box<dyn Error>> {
    let command = match args.get(1) {
        Some(c) => c.as_str(),
        None => {
            print_usage(&args[0]);
            return Ok(());
        }
    };

    let modular = Modular::new(config.modulus)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    match command {
        "pow" => {
            let a = next_integer(&mut tokens)?;
            let b = next_integer(&mut tokens)?;
            println!("{}", modular.pow(a, b));
        }
        "inverse" => {
            // n first; a b follow for the modular-division demo
            let n = next_integer(&mut tokens)?;
            println!("{}", modular.inverse(n)?);
            let a = next_integer(&mut tokens)?;
            let b = next_integer(&mut tokens)?;
            println!("{}", modular.div(a, b)?);
        }
        "ncr" => {
            let n = next_integer(&mut tokens)?;
            let r = next_integer(&mut tokens)?;
            info!(
                "building factorial table up to {}",
                config.tables.factorial_bound
            );
            let table = FactorialTable::build(config.tables.factorial_bound as usize, modular);
            println!("{}", table.ncr(n, r)?);
        }
        "ncr-direct" => {
            let n = next_integer(&mut tokens)?;
            let r = next_integer(&mut tokens)?;
            println!("{}", ncr_direct(&modular, n, r)?);
        }
        "gcd" => {
            let a = next_integer(&mut tokens)?;
            let b = next_integer(&mut tokens)?;
            println!(
                "{} {}",
                GCD::find_gcd_pair(a, b),
                GCD::find_lcm_pair(a, b)
            );
        }
        "factorize" => {
            let n = next_integer(&mut tokens)?;
            let table = FactorTable::new(config.tables.factor_bound);
            print_joined(&table.factorize(n)?);
        }
        "divisors" => {
            let n = next_integer(&mut tokens)?;
            let table = FactorTable::new(config.tables.factor_bound);
            print_joined(&table.divisors(n)?);
        }
        "primes" => {
            let n = next_integer(&mut tokens)?;
            let sieve = PrimeSieve::new(config.tables.sieve_bound);
            if n > sieve.bound() {
                return Err(Box::new(MathError::OutOfRange {
                    value: n,
                    bound: sieve.bound(),
                }));
            }
            let primes: Vec<u64> = sieve.primes().take_while(|&p| p <= n).collect();
            print_joined(&primes);
        }
        other => {
            print_usage(&args[0]);
            return Err(Box::new(MathError::InvalidInput(format!(
                "unknown command '{}'",
                other
            ))));
        }
    }

    Ok(())
}

fn next_integer<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> Result<u64, MathError> {
    let token = tokens
        .next()
        .ok_or_else(|| MathError::InvalidInput("unexpected end of input".to_string()))?;
    token.parse::<u64>().map_err(|_| {
        MathError::InvalidInput(format!("expected an unsigned integer, got '{}'", token))
    })
}

fn print_joined(values: &[u64]) {
    let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", line.join(" "));
}

fn print_usage(program: &str) {
    println!("usage: {} <command>", program);
    println!();
    println!("commands (operands are read from stdin):");
    println!("  pow         a b    ->  a^b mod P");
    println!("  inverse     n a b  ->  n^-1 mod P, then (a/b) mod P");
    println!("  ncr         n r    ->  C(n,r) mod P via factorial table");
    println!("  ncr-direct  n r    ->  C(n,r) mod P, no precomputation");
    println!("  gcd         a b    ->  gcd and lcm");
    println!("  factorize   n      ->  prime factors of n, ascending");
    println!("  divisors    n      ->  all divisors of n");
    println!("  primes      n      ->  primes up to n");
}
