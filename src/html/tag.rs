// NOTE: `const fn` can't be used as a discriminant initializer, so the
// values are precalculated manually. Consistency between the hashing
// algorithm and these values is guaranteed by the dedicated test below.
#[repr(u64)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tag {
    A = 6u64,
    Address = 6_754_642_712u64,
    Area = 220_486u64,
    B = 7u64,
    Base = 236_298u64,
    Blockquote = 265_678_647_808_810u64,
    Br = 247u64,
    Center = 279_569_751u64,
    Code = 282_922u64,
    Col = 8_849u64,
    Dir = 9_687u64,
    Div = 9_691u64,
    Dl = 305u64,
    Em = 338u64,
    Embed = 11_083_081u64,
    Fieldset = 393_343_197_529u64,
    Form = 381_682u64,
    H1 = 416u64,
    H2 = 417u64,
    H3 = 418u64,
    H4 = 419u64,
    H5 = 420u64,
    H6 = 421u64,
    Hr = 439u64,
    I = 14u64,
    Img = 14_924u64,
    Input = 15_325_017u64,
    Isindex = 15_853_004_125u64,
    Li = 558u64,
    Link = 572_016u64,
    Menu = 600_698u64,
    Meta = 600_870u64,
    Noframes = 674_703_296_856u64,
    Noscript = 675_124_329_145u64,
    Ol = 657u64,
    P = 21u64,
    Param = 22_240_466u64,
    Pre = 22_250u64,
    Source = 827_153_674u64,
    Strong = 832_295_532u64,
    Table = 26_418_730u64,
    Track = 26_974_480u64,
    Ul = 849u64,
    Wbr = 28_919u64,
}
