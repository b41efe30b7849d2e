use big_mul::BigUint;
use proptest::prelude::*;

fn parse(s: &str) -> BigUint {
    s.parse().expect("generated decimal string must parse")
}

proptest! {
    #[test]
    fn mul_commutes(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
        let x = parse(&a);
        let y = parse(&b);
        prop_assert_eq!((&x * &y).to_hex(), (&y * &x).to_hex());
    }

    #[test]
    fn one_is_identity(s in "[0-9]{1,60}") {
        let x = parse(&s);
        let one = BigUint::from(1_u32);
        prop_assert_eq!(&(&x * &one), &x);
        prop_assert_eq!(&(&one * &x), &x);
    }

    #[test]
    fn zero_annihilates(s in "[0-9]{1,60}") {
        let x = parse(&s);
        let product = &x * &BigUint::zero();
        prop_assert_eq!(&product, &BigUint::zero());
        prop_assert_eq!(product.to_hex(), "0x0");
    }

    #[test]
    fn matches_native_u128(a in any::<u64>(), b in any::<u64>()) {
        let product = &BigUint::from(a) * &BigUint::from(b);
        prop_assert_eq!(product.to_hex(), format!("{:#x}", a as u128 * b as u128));
    }

    #[test]
    fn parse_agrees_with_u64(n in any::<u64>()) {
        let parsed = parse(&n.to_string());
        prop_assert_eq!(&parsed, &BigUint::from(n));
        prop_assert_eq!(parsed.to_hex(), format!("{n:#x}"));
    }

    #[test]
    fn product_never_exceeds_operand_limb_sum(a in "[1-9][0-9]{0,59}", b in "[1-9][0-9]{0,59}") {
        let x = parse(&a);
        let y = parse(&b);
        let product = &x * &y;
        prop_assert!(product.limb_len() <= x.limb_len() + y.limb_len());
        // and trimming removes at most the one possible leading zero limb
        prop_assert!(product.limb_len() + 1 >= x.limb_len() + y.limb_len());
    }
}
