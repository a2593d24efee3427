use alloy_primitives::U256;
use ruint::uint;

/// 1.0 in Q128.128.
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

// Generated by `tick-table` from base = 1.000001, fixed point radix = 128, max ratio = 2^128.
// Regenerate and re-run the tick math tests whenever any of those change.
pub const MAX_TICK_MAGNITUDE: i32 = 88722883;
pub const TICK_TABLE_SIZE: usize = 27;
/// `round(2^128 / sqrt(1.000001)^(2^i))` for bit `i` of the tick magnitude.
pub const TICK_MULTIPLIERS: [U256; TICK_TABLE_SIZE] = [
    uint!(0xfffff79c8499329c7cbb2510d893283b_U256),
    uint!(0xffffef390978c398134b4ff3764fe410_U256),
    uint!(0xffffde72140b00a354bd3dc828e976c9_U256),
    uint!(0xffffbce42c7be6c998ad6318193c0b18_U256),
    uint!(0xffff79c86a8f6150a32d9778eceef97c_U256),
    uint!(0xfffef3911b7cff24ba1b3dbb5f8f5974_U256),
    uint!(0xfffde72350725cc4ea8feece3b5f13c8_U256),
    uint!(0xfffbce4b06c196e9247ac87695d53c60_U256),
    uint!(0xfff79ca7a4d1bf1ee8556cea23cdbaa5_U256),
    uint!(0xffef3995a5b6a6267530f207142a5764_U256),
    uint!(0xffde7444b28145508125d10077ba83b8_U256),
    uint!(0xffbceceeb791747f10df216f2e53ec57_U256),
    uint!(0xff79eb706b9a64c6431d76e63531e929_U256),
    uint!(0xfef41d1a5f2ae3a20676bec6f7f9459a_U256),
    uint!(0xfde95287d26d81bea159c37073122c73_U256),
    uint!(0xfbd701c7cbc4c8a6bb81efd232d1e4e7_U256),
    uint!(0xf7bf5211c72f5185f372aeb1d48f937e_U256),
    uint!(0xefc2bf59df33ecc28125cf78ec4f167f_U256),
    uint!(0xe08d35706200796273f0b3a981d90cfd_U256),
    uint!(0xc4f76b68947482dc198a48a54348c4ed_U256),
    uint!(0x978bcb9894317807e5fa4498eee7c0fa_U256),
    uint!(0x59b63684b86e9f486ec54727371ba6ca_U256),
    uint!(0x1f703399d88f6aa83a28b22d4a1f56e3_U256),
    uint!(0x3dc5dac7376e20fc8679758d1bcdcfc_U256),
    uint!(0xee7e32d61fdb0a5e622b820f681d0_U256),
    uint!(0xde2ee4bc381afa7089aa84bb66_U256),
    uint!(0xc0d55d4d7152c25fb139_U256),
];

pub const MIN_TICK: i32 = -MAX_TICK_MAGNITUDE;
pub const MAX_TICK: i32 = MAX_TICK_MAGNITUDE;

/// `tick_to_sqrt_ratio(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = uint!(18446748437148339061_U256);
/// `tick_to_sqrt_ratio(MAX_TICK)`
pub const MAX_SQRT_RATIO: U256 =
    uint!(6277100250585753475930931601400621808602321654880405518632_U256);
