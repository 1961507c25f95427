//! Generated CP950 (Big5) byte-pair to Unicode mapping.
//!
//! Keys are the packed pair `(high << 8) | low`, sorted ascending so the
//! lookup can binary-search. Regenerate with `scripts/gen_big5_table.py`.

#[rustfmt::skip]
pub(super) static BIG5_TABLE: &[(u16, &str)] = &[
    (0xA140, "　"), (0xA141, "，"), (0xA142, "、"), (0xA143, "。"), (0xA144, "．"), (0xA145, "‧"), (0xA146, "；"), (0xA147, "："),
    (0xA148, "？"), (0xA149, "！"), (0xA14A, "︰"), (0xA14B, "…"), (0xA14C, "‥"), (0xA14D, "﹐"), (0xA14E, "﹑"), (0xA14F, "﹒"),
    (0xA150, "·"), (0xA151, "﹔"), (0xA152, "﹕"), (0xA153, "﹖"), (0xA154, "﹗"), (0xA155, "｜"), (0xA156, "–"), (0xA157, "︱"),
    (0xA158, "—"), (0xA159, "︳"), (0xA15A, "╴"), (0xA15B, "︴"), (0xA15C, "﹏"), (0xA15D, "（"), (0xA15E, "）"), (0xA15F, "︵"),
    (0xA160, "︶"), (0xA161, "｛"), (0xA162, "｝"), (0xA163, "︷"), (0xA164, "︸"), (0xA165, "〔"), (0xA166, "〕"), (0xA167, "︹"),
    (0xA168, "︺"), (0xA169, "【"), (0xA16A, "】"), (0xA16B, "︻"), (0xA16C, "︼"), (0xA16D, "《"), (0xA16E, "》"), (0xA16F, "︽"),
    (0xA170, "︾"), (0xA171, "〈"), (0xA172, "〉"), (0xA173, "︿"), (0xA174, "﹀"), (0xA175, "「"), (0xA176, "」"), (0xA177, "﹁"),
    (0xA178, "﹂"), (0xA179, "『"), (0xA17A, "』"), (0xA17B, "﹃"), (0xA17C, "﹄"), (0xA17D, "﹙"), (0xA17E, "﹚"), (0xA1A1, "﹛"),
    (0xA1A2, "﹜"), (0xA1A3, "﹝"), (0xA1A4, "﹞"), (0xA1A5, "‘"), (0xA1A6, "’"), (0xA1A7, "“"), (0xA1A8, "”"), (0xA1A9, "〝"),
    (0xA1AA, "〞"), (0xA1AB, "‵"), (0xA1AC, "′"), (0xA1AD, "＃"), (0xA1AE, "＆"), (0xA1AF, "＊"), (0xA1B0, "※"), (0xA1B1, "§"),
    (0xA1B2, "〃"), (0xA1B3, "○"), (0xA1B4, "●"), (0xA1B5, "△"), (0xA1B6, "▲"), (0xA1B7, "◎"), (0xA1B8, "☆"), (0xA1B9, "★"),
    (0xA1BA, "◇"), (0xA1BB, "◆"), (0xA1BC, "□"), (0xA1BD, "■"), (0xA1BE, "▽"), (0xA1BF, "▼"), (0xA1C0, "㊣"), (0xA1C1, "℅"),
    (0xA1C2, "¯"), (0xA1C3, "￣"), (0xA1C4, "＿"), (0xA1C5, "ˍ"), (0xA1C6, "﹉"), (0xA1C7, "﹊"), (0xA1C8, "﹍"), (0xA1C9, "﹎"),
    (0xA1CA, "﹋"), (0xA1CB, "﹌"), (0xA1CC, "﹟"), (0xA1CD, "﹠"), (0xA1CE, "﹡"), (0xA1CF, "＋"), (0xA1D0, "－"), (0xA1D1, "×"),
    (0xA1D2, "÷"), (0xA1D3, "±"), (0xA1D4, "√"), (0xA1D5, "＜"), (0xA1D6, "＞"), (0xA1D7, "＝"), (0xA1D8, "≦"), (0xA1D9, "≧"),
    (0xA1DA, "≠"), (0xA1DB, "∞"), (0xA1DC, "≒"), (0xA1DD, "≡"), (0xA1DE, "﹢"), (0xA1DF, "﹣"), (0xA1E0, "﹤"), (0xA1E1, "﹥"),
    (0xA1E2, "﹦"), (0xA1E3, "～"), (0xA1E4, "∩"), (0xA1E5, "∪"), (0xA1E6, "⊥"), (0xA1E7, "∠"), (0xA1E8, "∟"), (0xA1E9, "⊿"),
    (0xA1EA, "㏒"), (0xA1EB, "㏑"), (0xA1EC, "∫"), (0xA1ED, "∮"), (0xA1EE, "∵"), (0xA1EF, "∴"), (0xA1F0, "♀"), (0xA1F1, "♂"),
    (0xA1F2, "⊕"), (0xA1F3, "⊙"), (0xA1F4, "↑"), (0xA1F5, "↓"), (0xA1F6, "←"), (0xA1F7, "→"), (0xA1F8, "↖"), (0xA1F9, "↗"),
    (0xA1FA, "↙"), (0xA1FB, "↘"), (0xA1FC, "∥"), (0xA1FD, "∣"), (0xA1FE, "／"), (0xA240, "＼"), (0xA241, "∕"), (0xA242, "﹨"),
    (0xA243, "＄"), (0xA244, "￥"), (0xA245, "〒"), (0xA246, "￠"), (0xA247, "￡"), (0xA248, "％"), (0xA249, "＠"), (0xA24A, "℃"),
    (0xA24B, "℉"), (0xA24C, "﹩"), (0xA24D, "﹪"), (0xA24E, "﹫"), (0xA24F, "㏕"), (0xA250, "㎜"), (0xA251, "㎝"), (0xA252, "㎞"),
    (0xA253, "㏎"), (0xA254, "㎡"), (0xA255, "㎎"), (0xA256, "㎏"), (0xA257, "㏄"), (0xA258, "°"), (0xA259, "兙"), (0xA25A, "兛"),
    (0xA25B, "兞"), (0xA25C, "兝"), (0xA25D, "兡"), (0xA25E, "兣"), (0xA25F, "嗧"), (0xA260, "瓩"), (0xA261, "糎"), (0xA262, "▁"),
    (0xA263, "▂"), (0xA264, "▃"), (0xA265, "▄"), (0xA266, "▅"), (0xA267, "▆"), (0xA268, "▇"), (0xA269, "█"), (0xA26A, "▏"),
    (0xA26B, "▎"), (0xA26C, "▍"), (0xA26D, "▌"), (0xA26E, "▋"), (0xA26F, "▊"), (0xA270, "▉"), (0xA271, "┼"), (0xA272, "┴"),
    (0xA273, "┬"), (0xA274, "┤"), (0xA275, "├"), (0xA276, "▔"), (0xA277, "─"), (0xA278, "│"), (0xA279, "▕"), (0xA27A, "┌"),
    (0xA27B, "┐"), (0xA27C, "└"), (0xA27D, "┘"), (0xA27E, "╭"), (0xA2A1, "╮"), (0xA2A2, "╰"), (0xA2A3, "╯"), (0xA2A4, "═"),
    (0xA2A5, "╞"), (0xA2A6, "╪"), (0xA2A7, "╡"), (0xA2A8, "◢"), (0xA2A9, "◣"), (0xA2AA, "◥"), (0xA2AB, "◤"), (0xA2AC, "╱"),
    (0xA2AD, "╲"), (0xA2AE, "╳"), (0xA2AF, "０"), (0xA2B0, "１"), (0xA2B1, "２"), (0xA2B2, "３"), (0xA2B3, "４"), (0xA2B4, "５"),
    (0xA2B5, "６"), (0xA2B6, "７"), (0xA2B7, "８"), (0xA2B8, "９"), (0xA2B9, "Ⅰ"), (0xA2BA, "Ⅱ"), (0xA2BB, "Ⅲ"), (0xA2BC, "Ⅳ"),
    (0xA2BD, "Ⅴ"), (0xA2BE, "Ⅵ"), (0xA2BF, "Ⅶ"), (0xA2C0, "Ⅷ"), (0xA2C1, "Ⅸ"), (0xA2C2, "Ⅹ"), (0xA2C3, "〡"), (0xA2C4, "〢"),
    (0xA2C5, "〣"), (0xA2C6, "〤"), (0xA2C7, "〥"), (0xA2C8, "〦"), (0xA2C9, "〧"), (0xA2CA, "〨"), (0xA2CB, "〩"), (0xA2CC, "十"),
    (0xA2CD, "卄"), (0xA2CE, "卅"), (0xA2CF, "Ａ"), (0xA2D0, "Ｂ"), (0xA2D1, "Ｃ"), (0xA2D2, "Ｄ"), (0xA2D3, "Ｅ"), (0xA2D4, "Ｆ"),
    (0xA2D5, "Ｇ"), (0xA2D6, "Ｈ"), (0xA2D7, "Ｉ"), (0xA2D8, "Ｊ"), (0xA2D9, "Ｋ"), (0xA2DA, "Ｌ"), (0xA2DB, "Ｍ"), (0xA2DC, "Ｎ"),
    (0xA2DD, "Ｏ"), (0xA2DE, "Ｐ"), (0xA2DF, "Ｑ"), (0xA2E0, "Ｒ"), (0xA2E1, "Ｓ"), (0xA2E2, "Ｔ"), (0xA2E3, "Ｕ"), (0xA2E4, "Ｖ"),
    (0xA2E5, "Ｗ"), (0xA2E6, "Ｘ"), (0xA2E7, "Ｙ"), (0xA2E8, "Ｚ"), (0xA2E9, "ａ"), (0xA2EA, "ｂ"), (0xA2EB, "ｃ"), (0xA2EC, "ｄ"),
    (0xA2ED, "ｅ"), (0xA2EE, "ｆ"), (0xA2EF, "ｇ"), (0xA2F0, "ｈ"), (0xA2F1, "ｉ"), (0xA2F2, "ｊ"), (0xA2F3, "ｋ"), (0xA2F4, "ｌ"),
    (0xA2F5, "ｍ"), (0xA2F6, "ｎ"), (0xA2F7, "ｏ"), (0xA2F8, "ｐ"), (0xA2F9, "ｑ"), (0xA2FA, "ｒ"), (0xA2FB, "ｓ"), (0xA2FC, "ｔ"),
    (0xA2FD, "ｕ"), (0xA2FE, "ｖ"), (0xA340, "ｗ"), (0xA341, "ｘ"), (0xA342, "ｙ"), (0xA343, "ｚ"), (0xA344, "Α"), (0xA345, "Β"),
    (0xA346, "Γ"), (0xA347, "Δ"), (0xA348, "Ε"), (0xA349, "Ζ"), (0xA34A, "Η"), (0xA34B, "Θ"), (0xA34C, "Ι"), (0xA34D, "Κ"),
    (0xA34E, "Λ"), (0xA34F, "Μ"), (0xA350, "Ν"), (0xA351, "Ξ"), (0xA352, "Ο"), (0xA353, "Π"), (0xA354, "Ρ"), (0xA355, "Σ"),
    (0xA356, "Τ"), (0xA357, "Υ"), (0xA358, "Φ"), (0xA359, "Χ"), (0xA35A, "Ψ"), (0xA35B, "Ω"), (0xA35C, "α"), (0xA35D, "β"),
    (0xA35E, "γ"), (0xA35F, "δ"), (0xA360, "ε"), (0xA361, "ζ"), (0xA362, "η"), (0xA363, "θ"), (0xA364, "ι"), (0xA365, "κ"),
    (0xA366, "λ"), (0xA367, "μ"), (0xA368, "ν"), (0xA369, "ξ"), (0xA36A, "ο"), (0xA36B, "π"), (0xA36C, "ρ"), (0xA36D, "σ"),
    (0xA36E, "τ"), (0xA36F, "υ"), (0xA370, "φ"), (0xA371, "χ"), (0xA372, "ψ"), (0xA373, "ω"), (0xA374, "ㄅ"), (0xA375, "ㄆ"),
    (0xA376, "ㄇ"), (0xA377, "ㄈ"), (0xA378, "ㄉ"), (0xA379, "ㄊ"), (0xA37A, "ㄋ"), (0xA37B, "ㄌ"), (0xA37C, "ㄍ"), (0xA37D, "ㄎ"),
    (0xA37E, "ㄏ"), (0xA3A1, "ㄐ"), (0xA3A2, "ㄑ"), (0xA3A3, "ㄒ"), (0xA3A4, "ㄓ"), (0xA3A5, "ㄔ"), (0xA3A6, "ㄕ"), (0xA3A7, "ㄖ"),
    (0xA3A8, "ㄗ"), (0xA3A9, "ㄘ"), (0xA3AA, "ㄙ"), (0xA3AB, "ㄚ"), (0xA3AC, "ㄛ"), (0xA3AD, "ㄜ"), (0xA3AE, "ㄝ"), (0xA3AF, "ㄞ"),
    (0xA3B0, "ㄟ"), (0xA3B1, "ㄠ"), (0xA3B2, "ㄡ"), (0xA3B3, "ㄢ"), (0xA3B4, "ㄣ"), (0xA3B5, "ㄤ"), (0xA3B6, "ㄥ"), (0xA3B7, "ㄦ"),
    (0xA3B8, "ㄧ"), (0xA3B9, "ㄨ"), (0xA3BA, "ㄩ"), (0xA3BB, "˙"), (0xA3BC, "ˉ"), (0xA3BD, "ˊ"), (0xA3BE, "ˇ"), (0xA3BF, "ˋ"),
    (0xA3E1, "€"), (0xA440, "一"), (0xA441, "乙"), (0xA442, "丁"), (0xA443, "七"), (0xA444, "乃"), (0xA445, "九"), (0xA446, "了"),
    (0xA447, "二"), (0xA448, "人"), (0xA449, "儿"), (0xA44A, "入"), (0xA44B, "八"), (0xA44C, "几"), (0xA44D, "刀"), (0xA44E, "刁"),
    (0xA44F, "力"), (0xA450, "匕"), (0xA451, "十"), (0xA452, "卜"), (0xA453, "又"), (0xA454, "三"), (0xA455, "下"), (0xA456, "丈"),
    (0xA457, "上"), (0xA458, "丫"), (0xA459, "丸"), (0xA45A, "凡"), (0xA45B, "久"), (0xA45C, "么"), (0xA45D, "也"), (0xA45E, "乞"),
    (0xA45F, "于"), (0xA460, "亡"), (0xA461, "兀"), (0xA462, "刃"), (0xA463, "勺"), (0xA464, "千"), (0xA465, "叉"), (0xA466, "口"),
    (0xA467, "土"), (0xA468, "士"), (0xA469, "夕"), (0xA46A, "大"), (0xA46B, "女"), (0xA46C, "子"), (0xA46D, "孑"), (0xA46E, "孓"),
    (0xA46F, "寸"), (0xA470, "小"), (0xA471, "尢"), (0xA472, "尸"), (0xA473, "山"), (0xA474, "川"), (0xA475, "工"), (0xA476, "己"),
    (0xA477, "已"), (0xA478, "巳"), (0xA479, "巾"), (0xA47A, "干"), (0xA47B, "廾"), (0xA47C, "弋"), (0xA47D, "弓"), (0xA47E, "才"),
    (0xA4A1, "丑"), (0xA4A2, "丐"), (0xA4A3, "不"), (0xA4A4, "中"), (0xA4A5, "丰"), (0xA4A6, "丹"), (0xA4A7, "之"), (0xA4A8, "尹"),
    (0xA4A9, "予"), (0xA4AA, "云"), (0xA4AB, "井"), (0xA4AC, "互"), (0xA4AD, "五"), (0xA4AE, "亢"), (0xA4AF, "仁"), (0xA4B0, "什"),
    (0xA4B1, "仃"), (0xA4B2, "仆"), (0xA4B3, "仇"), (0xA4B4, "仍"), (0xA4B5, "今"), (0xA4B6, "介"), (0xA4B7, "仄"), (0xA4B8, "元"),
    (0xA4B9, "允"), (0xA4BA, "內"), (0xA4BB, "六"), (0xA4BC, "兮"), (0xA4BD, "公"), (0xA4BE, "冗"), (0xA4BF, "凶"), (0xA4C0, "分"),
    (0xA4C1, "切"), (0xA4C2, "刈"), (0xA4C3, "勻"), (0xA4C4, "勾"), (0xA4C5, "勿"), (0xA4C6, "化"), (0xA4C7, "匹"), (0xA4C8, "午"),
    (0xA4C9, "升"), (0xA4CA, "卅"), (0xA4CB, "卞"), (0xA4CC, "厄"), (0xA4CD, "友"), (0xA4CE, "及"), (0xA4CF, "反"), (0xA4D0, "壬"),
    (0xA4D1, "天"), (0xA4D2, "夫"), (0xA4D3, "太"), (0xA4D4, "夭"), (0xA4D5, "孔"), (0xA4D6, "少"), (0xA4D7, "尤"), (0xA4D8, "尺"),
    (0xA4D9, "屯"), (0xA4DA, "巴"), (0xA4DB, "幻"), (0xA4DC, "廿"), (0xA4DD, "弔"), (0xA4DE, "引"), (0xA4DF, "心"), (0xA4E0, "戈"),
    (0xA4E1, "戶"), (0xA4E2, "手"), (0xA4E3, "扎"), (0xA4E4, "支"), (0xA4E5, "文"), (0xA4E6, "斗"), (0xA4E7, "斤"), (0xA4E8, "方"),
    (0xA4E9, "日"), (0xA4EA, "曰"), (0xA4EB, "月"), (0xA4EC, "木"), (0xA4ED, "欠"), (0xA4EE, "止"), (0xA4EF, "歹"), (0xA4F0, "毋"),
    (0xA4F1, "比"), (0xA4F2, "毛"), (0xA4F3, "氏"), (0xA4F4, "水"), (0xA4F5, "火"), (0xA4F6, "爪"), (0xA4F7, "父"), (0xA4F8, "爻"),
    (0xA4F9, "片"), (0xA4FA, "牙"), (0xA4FB, "牛"), (0xA4FC, "犬"), (0xA4FD, "王"), (0xA4FE, "丙"), (0xA540, "世"), (0xA541, "丕"),
    (0xA542, "且"), (0xA543, "丘"), (0xA544, "主"), (0xA545, "乍"), (0xA546, "乏"), (0xA547, "乎"), (0xA548, "以"), (0xA549, "付"),
    (0xA54A, "仔"), (0xA54B, "仕"), (0xA54C, "他"), (0xA54D, "仗"), (0xA54E, "代"), (0xA54F, "令"), (0xA550, "仙"), (0xA551, "仞"),
    (0xA552, "充"), (0xA553, "兄"), (0xA554, "冉"), (0xA555, "冊"), (0xA556, "冬"), (0xA557, "凹"), (0xA558, "出"), (0xA559, "凸"),
    (0xA55A, "刊"), (0xA55B, "加"), (0xA55C, "功"), (0xA55D, "包"), (0xA55E, "匆"), (0xA55F, "北"), (0xA560, "匝"), (0xA561, "仟"),
    (0xA562, "半"), (0xA563, "卉"), (0xA564, "卡"), (0xA565, "占"), (0xA566, "卯"), (0xA567, "卮"), (0xA568, "去"), (0xA569, "可"),
    (0xA56A, "古"), (0xA56B, "右"), (0xA56C, "召"), (0xA56D, "叮"), (0xA56E, "叩"), (0xA56F, "叨"), (0xA570, "叼"), (0xA571, "司"),
    (0xA572, "叵"), (0xA573, "叫"), (0xA574, "另"), (0xA575, "只"), (0xA576, "史"), (0xA577, "叱"), (0xA578, "台"), (0xA579, "句"),
    (0xA57A, "叭"), (0xA57B, "叻"), (0xA57C, "四"), (0xA57D, "囚"), (0xA57E, "外"), (0xA5A1, "央"), (0xA5A2, "失"), (0xA5A3, "奴"),
    (0xA5A4, "奶"), (0xA5A5, "孕"), (0xA5A6, "它"), (0xA5A7, "尼"), (0xA5A8, "巨"), (0xA5A9, "巧"), (0xA5AA, "左"), (0xA5AB, "市"),
    (0xA5AC, "布"), (0xA5AD, "平"), (0xA5AE, "幼"), (0xA5AF, "弁"), (0xA5B0, "弘"), (0xA5B1, "弗"), (0xA5B2, "必"), (0xA5B3, "戊"),
    (0xA5B4, "打"), (0xA5B5, "扔"), (0xA5B6, "扒"), (0xA5B7, "扑"), (0xA5B8, "斥"), (0xA5B9, "旦"), (0xA5BA, "朮"), (0xA5BB, "本"),
    (0xA5BC, "未"), (0xA5BD, "末"), (0xA5BE, "札"), (0xA5BF, "正"), (0xA5C0, "母"), (0xA5C1, "民"), (0xA5C2, "氐"), (0xA5C3, "永"),
    (0xA5C4, "汁"), (0xA5C5, "汀"), (0xA5C6, "氾"), (0xA5C7, "犯"), (0xA5C8, "玄"), (0xA5C9, "玉"), (0xA5CA, "瓜"), (0xA5CB, "瓦"),
    (0xA5CC, "甘"), (0xA5CD, "生"), (0xA5CE, "用"), (0xA5CF, "甩"), (0xA5D0, "田"), (0xA5D1, "由"), (0xA5D2, "甲"), (0xA5D3, "申"),
    (0xA5D4, "疋"), (0xA5D5, "白"), (0xA5D6, "皮"), (0xA5D7, "皿"), (0xA5D8, "目"), (0xA5D9, "矛"), (0xA5DA, "矢"), (0xA5DB, "石"),
    (0xA5DC, "示"), (0xA5DD, "禾"), (0xA5DE, "穴"), (0xA5DF, "立"), (0xA5E0, "丞"), (0xA5E1, "丟"), (0xA5E2, "乒"), (0xA5E3, "乓"),
    (0xA5E4, "乩"), (0xA5E5, "亙"), (0xA5E6, "交"), (0xA5E7, "亦"), (0xA5E8, "亥"), (0xA5E9, "仿"), (0xA5EA, "伉"), (0xA5EB, "伙"),
    (0xA5EC, "伊"), (0xA5ED, "伕"), (0xA5EE, "伍"), (0xA5EF, "伐"), (0xA5F0, "休"), (0xA5F1, "伏"), (0xA5F2, "仲"), (0xA5F3, "件"),
    (0xA5F4, "任"), (0xA5F5, "仰"), (0xA5F6, "仳"), (0xA5F7, "份"), (0xA5F8, "企"), (0xA5F9, "伋"), (0xA5FA, "光"), (0xA5FB, "兇"),
    (0xA5FC, "兆"), (0xA5FD, "先"), (0xA5FE, "全"), (0xA640, "共"), (0xA641, "再"), (0xA642, "冰"), (0xA643, "列"), (0xA644, "刑"),
    (0xA645, "划"), (0xA646, "刎"), (0xA647, "刖"), (0xA648, "劣"), (0xA649, "匈"), (0xA64A, "匡"), (0xA64B, "匠"), (0xA64C, "印"),
    (0xA64D, "危"), (0xA64E, "吉"), (0xA64F, "吏"), (0xA650, "同"), (0xA651, "吊"), (0xA652, "吐"), (0xA653, "吁"), (0xA654, "吋"),
    (0xA655, "各"), (0xA656, "向"), (0xA657, "名"), (0xA658, "合"), (0xA659, "吃"), (0xA65A, "后"), (0xA65B, "吆"), (0xA65C, "吒"),
    (0xA65D, "因"), (0xA65E, "回"), (0xA65F, "囝"), (0xA660, "圳"), (0xA661, "地"), (0xA662, "在"), (0xA663, "圭"), (0xA664, "圬"),
    (0xA665, "圯"), (0xA666, "圩"), (0xA667, "夙"), (0xA668, "多"), (0xA669, "夷"), (0xA66A, "夸"), (0xA66B, "妄"), (0xA66C, "奸"),
    (0xA66D, "妃"), (0xA66E, "好"), (0xA66F, "她"), (0xA670, "如"), (0xA671, "妁"), (0xA672, "字"), (0xA673, "存"), (0xA674, "宇"),
    (0xA675, "守"), (0xA676, "宅"), (0xA677, "安"), (0xA678, "寺"), (0xA679, "尖"), (0xA67A, "屹"), (0xA67B, "州"), (0xA67C, "帆"),
    (0xA67D, "并"), (0xA67E, "年"), (0xA6A1, "式"), (0xA6A2, "弛"), (0xA6A3, "忙"), (0xA6A4, "忖"), (0xA6A5, "戎"), (0xA6A6, "戌"),
    (0xA6A7, "戍"), (0xA6A8, "成"), (0xA6A9, "扣"), (0xA6AA, "扛"), (0xA6AB, "托"), (0xA6AC, "收"), (0xA6AD, "早"), (0xA6AE, "旨"),
    (0xA6AF, "旬"), (0xA6B0, "旭"), (0xA6B1, "曲"), (0xA6B2, "曳"), (0xA6B3, "有"), (0xA6B4, "朽"), (0xA6B5, "朴"), (0xA6B6, "朱"),
    (0xA6B7, "朵"), (0xA6B8, "次"), (0xA6B9, "此"), (0xA6BA, "死"), (0xA6BB, "氖"), (0xA6BC, "汝"), (0xA6BD, "汗"), (0xA6BE, "汙"),
    (0xA6BF, "江"), (0xA6C0, "池"), (0xA6C1, "汐"), (0xA6C2, "汕"), (0xA6C3, "污"), (0xA6C4, "汛"), (0xA6C5, "汍"), (0xA6C6, "汎"),
    (0xA6C7, "灰"), (0xA6C8, "牟"), (0xA6C9, "牝"), (0xA6CA, "百"), (0xA6CB, "竹"), (0xA6CC, "米"), (0xA6CD, "糸"), (0xA6CE, "缶"),
    (0xA6CF, "羊"), (0xA6D0, "羽"), (0xA6D1, "老"), (0xA6D2, "考"), (0xA6D3, "而"), (0xA6D4, "耒"), (0xA6D5, "耳"), (0xA6D6, "聿"),
    (0xA6D7, "肉"), (0xA6D8, "肋"), (0xA6D9, "肌"), (0xA6DA, "臣"), (0xA6DB, "自"), (0xA6DC, "至"), (0xA6DD, "臼"), (0xA6DE, "舌"),
    (0xA6DF, "舛"), (0xA6E0, "舟"), (0xA6E1, "艮"), (0xA6E2, "色"), (0xA6E3, "艾"), (0xA6E4, "虫"), (0xA6E5, "血"), (0xA6E6, "行"),
    (0xA6E7, "衣"), (0xA6E8, "西"), (0xA6E9, "阡"), (0xA6EA, "串"), (0xA6EB, "亨"), (0xA6EC, "位"), (0xA6ED, "住"), (0xA6EE, "佇"),
    (0xA6EF, "佗"), (0xA6F0, "佞"), (0xA6F1, "伴"), (0xA6F2, "佛"), (0xA6F3, "何"), (0xA6F4, "估"), (0xA6F5, "佐"), (0xA6F6, "佑"),
    (0xA6F7, "伽"), (0xA6F8, "伺"), (0xA6F9, "伸"), (0xA6FA, "佃"), (0xA6FB, "佔"), (0xA6FC, "似"), (0xA6FD, "但"), (0xA6FE, "佣"),
    (0xA740, "作"), (0xA741, "你"), (0xA742, "伯"), (0xA743, "低"), (0xA744, "伶"), (0xA745, "余"), (0xA746, "佝"), (0xA747, "佈"),
    (0xA748, "佚"), (0xA749, "兌"), (0xA74A, "克"), (0xA74B, "免"), (0xA74C, "兵"), (0xA74D, "冶"), (0xA74E, "冷"), (0xA74F, "別"),
    (0xA750, "判"), (0xA751, "利"), (0xA752, "刪"), (0xA753, "刨"), (0xA754, "劫"), (0xA755, "助"), (0xA756, "努"), (0xA757, "劬"),
    (0xA758, "匣"), (0xA759, "即"), (0xA75A, "卵"), (0xA75B, "吝"), (0xA75C, "吭"), (0xA75D, "吞"), (0xA75E, "吾"), (0xA75F, "否"),
    (0xA760, "呎"), (0xA761, "吧"), (0xA762, "呆"), (0xA763, "呃"), (0xA764, "吳"), (0xA765, "呈"), (0xA766, "呂"), (0xA767, "君"),
    (0xA768, "吩"), (0xA769, "告"), (0xA76A, "吹"), (0xA76B, "吻"), (0xA76C, "吸"), (0xA76D, "吮"), (0xA76E, "吵"), (0xA76F, "吶"),
    (0xA770, "吠"), (0xA771, "吼"), (0xA772, "呀"), (0xA773, "吱"), (0xA774, "含"), (0xA775, "吟"), (0xA776, "听"), (0xA777, "囪"),
    (0xA778, "困"), (0xA779, "囤"), (0xA77A, "囫"), (0xA77B, "坊"), (0xA77C, "坑"), (0xA77D, "址"), (0xA77E, "坍"), (0xA7A1, "均"),
    (0xA7A2, "坎"), (0xA7A3, "圾"), (0xA7A4, "坐"), (0xA7A5, "坏"), (0xA7A6, "圻"), (0xA7A7, "壯"), (0xA7A8, "夾"), (0xA7A9, "妝"),
    (0xA7AA, "妒"), (0xA7AB, "妨"), (0xA7AC, "妞"), (0xA7AD, "妣"), (0xA7AE, "妙"), (0xA7AF, "妖"), (0xA7B0, "妍"), (0xA7B1, "妤"),
    (0xA7B2, "妓"), (0xA7B3, "妊"), (0xA7B4, "妥"), (0xA7B5, "孝"), (0xA7B6, "孜"), (0xA7B7, "孚"), (0xA7B8, "孛"), (0xA7B9, "完"),
    (0xA7BA, "宋"), (0xA7BB, "宏"), (0xA7BC, "尬"), (0xA7BD, "局"), (0xA7BE, "屁"), (0xA7BF, "尿"), (0xA7C0, "尾"), (0xA7C1, "岐"),
    (0xA7C2, "岑"), (0xA7C3, "岔"), (0xA7C4, "岌"), (0xA7C5, "巫"), (0xA7C6, "希"), (0xA7C7, "序"), (0xA7C8, "庇"), (0xA7C9, "床"),
    (0xA7CA, "廷"), (0xA7CB, "弄"), (0xA7CC, "弟"), (0xA7CD, "彤"), (0xA7CE, "形"), (0xA7CF, "彷"), (0xA7D0, "役"), (0xA7D1, "忘"),
    (0xA7D2, "忌"), (0xA7D3, "志"), (0xA7D4, "忍"), (0xA7D5, "忱"), (0xA7D6, "快"), (0xA7D7, "忸"), (0xA7D8, "忪"), (0xA7D9, "戒"),
    (0xA7DA, "我"), (0xA7DB, "抄"), (0xA7DC, "抗"), (0xA7DD, "抖"), (0xA7DE, "技"), (0xA7DF, "扶"), (0xA7E0, "抉"), (0xA7E1, "扭"),
    (0xA7E2, "把"), (0xA7E3, "扼"), (0xA7E4, "找"), (0xA7E5, "批"), (0xA7E6, "扳"), (0xA7E7, "抒"), (0xA7E8, "扯"), (0xA7E9, "折"),
    (0xA7EA, "扮"), (0xA7EB, "投"), (0xA7EC, "抓"), (0xA7ED, "抑"), (0xA7EE, "抆"), (0xA7EF, "改"), (0xA7F0, "攻"), (0xA7F1, "攸"),
    (0xA7F2, "旱"), (0xA7F3, "更"), (0xA7F4, "束"), (0xA7F5, "李"), (0xA7F6, "杏"), (0xA7F7, "材"), (0xA7F8, "村"), (0xA7F9, "杜"),
    (0xA7FA, "杖"), (0xA7FB, "杞"), (0xA7FC, "杉"), (0xA7FD, "杆"), (0xA7FE, "杠"), (0xA840, "杓"), (0xA841, "杗"), (0xA842, "步"),
    (0xA843, "每"), (0xA844, "求"), (0xA845, "汞"), (0xA846, "沙"), (0xA847, "沁"), (0xA848, "沈"), (0xA849, "沉"), (0xA84A, "沅"),
    (0xA84B, "沛"), (0xA84C, "汪"), (0xA84D, "決"), (0xA84E, "沐"), (0xA84F, "汰"), (0xA850, "沌"), (0xA851, "汨"), (0xA852, "沖"),
    (0xA853, "沒"), (0xA854, "汽"), (0xA855, "沃"), (0xA856, "汲"), (0xA857, "汾"), (0xA858, "汴"), (0xA859, "沆"), (0xA85A, "汶"),
    (0xA85B, "沍"), (0xA85C, "沔"), (0xA85D, "沘"), (0xA85E, "沂"), (0xA85F, "灶"), (0xA860, "灼"), (0xA861, "災"), (0xA862, "灸"),
    (0xA863, "牢"), (0xA864, "牡"), (0xA865, "牠"), (0xA866, "狄"), (0xA867, "狂"), (0xA868, "玖"), (0xA869, "甬"), (0xA86A, "甫"),
    (0xA86B, "男"), (0xA86C, "甸"), (0xA86D, "皂"), (0xA86E, "盯"), (0xA86F, "矣"), (0xA870, "私"), (0xA871, "秀"), (0xA872, "禿"),
    (0xA873, "究"), (0xA874, "系"), (0xA875, "罕"), (0xA876, "肖"), (0xA877, "肓"), (0xA878, "肝"), (0xA879, "肘"), (0xA87A, "肛"),
    (0xA87B, "肚"), (0xA87C, "育"), (0xA87D, "良"), (0xA87E, "芒"), (0xA8A1, "芋"), (0xA8A2, "芍"), (0xA8A3, "見"), (0xA8A4, "角"),
    (0xA8A5, "言"), (0xA8A6, "谷"), (0xA8A7, "豆"), (0xA8A8, "豕"), (0xA8A9, "貝"), (0xA8AA, "赤"), (0xA8AB, "走"), (0xA8AC, "足"),
    (0xA8AD, "身"), (0xA8AE, "車"), (0xA8AF, "辛"), (0xA8B0, "辰"), (0xA8B1, "迂"), (0xA8B2, "迆"), (0xA8B3, "迅"), (0xA8B4, "迄"),
    (0xA8B5, "巡"), (0xA8B6, "邑"), (0xA8B7, "邢"), (0xA8B8, "邪"), (0xA8B9, "邦"), (0xA8BA, "那"), (0xA8BB, "酉"), (0xA8BC, "釆"),
    (0xA8BD, "里"), (0xA8BE, "防"), (0xA8BF, "阮"), (0xA8C0, "阱"), (0xA8C1, "阪"), (0xA8C2, "阬"), (0xA8C3, "並"), (0xA8C4, "乖"),
    (0xA8C5, "乳"), (0xA8C6, "事"), (0xA8C7, "些"), (0xA8C8, "亞"), (0xA8C9, "享"), (0xA8CA, "京"), (0xA8CB, "佯"), (0xA8CC, "依"),
    (0xA8CD, "侍"), (0xA8CE, "佳"), (0xA8CF, "使"), (0xA8D0, "佬"), (0xA8D1, "供"), (0xA8D2, "例"), (0xA8D3, "來"), (0xA8D4, "侃"),
    (0xA8D5, "佰"), (0xA8D6, "併"), (0xA8D7, "侈"), (0xA8D8, "佩"), (0xA8D9, "佻"), (0xA8DA, "侖"), (0xA8DB, "佾"), (0xA8DC, "侏"),
    (0xA8DD, "侑"), (0xA8DE, "佺"), (0xA8DF, "兔"), (0xA8E0, "兒"), (0xA8E1, "兕"), (0xA8E2, "兩"), (0xA8E3, "具"), (0xA8E4, "其"),
    (0xA8E5, "典"), (0xA8E6, "冽"), (0xA8E7, "函"), (0xA8E8, "刻"), (0xA8E9, "券"), (0xA8EA, "刷"), (0xA8EB, "刺"), (0xA8EC, "到"),
    (0xA8ED, "刮"), (0xA8EE, "制"), (0xA8EF, "剁"), (0xA8F0, "劾"), (0xA8F1, "劻"), (0xA8F2, "卒"), (0xA8F3, "協"), (0xA8F4, "卓"),
    (0xA8F5, "卑"), (0xA8F6, "卦"), (0xA8F7, "卷"), (0xA8F8, "卸"), (0xA8F9, "卹"), (0xA8FA, "取"), (0xA8FB, "叔"), (0xA8FC, "受"),
    (0xA8FD, "味"), (0xA8FE, "呵"), (0xA940, "咖"), (0xA941, "呸"), (0xA942, "咕"), (0xA943, "咀"), (0xA944, "呻"), (0xA945, "呷"),
    (0xA946, "咄"), (0xA947, "咒"), (0xA948, "咆"), (0xA949, "呼"), (0xA94A, "咐"), (0xA94B, "呱"), (0xA94C, "呶"), (0xA94D, "和"),
    (0xA94E, "咚"), (0xA94F, "呢"), (0xA950, "周"), (0xA951, "咋"), (0xA952, "命"), (0xA953, "咎"), (0xA954, "固"), (0xA955, "垃"),
    (0xA956, "坷"), (0xA957, "坪"), (0xA958, "坩"), (0xA959, "坡"), (0xA95A, "坦"), (0xA95B, "坤"), (0xA95C, "坼"), (0xA95D, "夜"),
    (0xA95E, "奉"), (0xA95F, "奇"), (0xA960, "奈"), (0xA961, "奄"), (0xA962, "奔"), (0xA963, "妾"), (0xA964, "妻"), (0xA965, "委"),
    (0xA966, "妹"), (0xA967, "妮"), (0xA968, "姑"), (0xA969, "姆"), (0xA96A, "姐"), (0xA96B, "姍"), (0xA96C, "始"), (0xA96D, "姓"),
    (0xA96E, "姊"), (0xA96F, "妯"), (0xA970, "妳"), (0xA971, "姒"), (0xA972, "姅"), (0xA973, "孟"), (0xA974, "孤"), (0xA975, "季"),
    (0xA976, "宗"), (0xA977, "定"), (0xA978, "官"), (0xA979, "宜"), (0xA97A, "宙"), (0xA97B, "宛"), (0xA97C, "尚"), (0xA97D, "屈"),
    (0xA97E, "居"), (0xA9A1, "屆"), (0xA9A2, "岷"), (0xA9A3, "岡"), (0xA9A4, "岸"), (0xA9A5, "岩"), (0xA9A6, "岫"), (0xA9A7, "岱"),
    (0xA9A8, "岳"), (0xA9A9, "帘"), (0xA9AA, "帚"), (0xA9AB, "帖"), (0xA9AC, "帕"), (0xA9AD, "帛"), (0xA9AE, "帑"), (0xA9AF, "幸"),
    (0xA9B0, "庚"), (0xA9B1, "店"), (0xA9B2, "府"), (0xA9B3, "底"), (0xA9B4, "庖"), (0xA9B5, "延"), (0xA9B6, "弦"), (0xA9B7, "弧"),
    (0xA9B8, "弩"), (0xA9B9, "往"), (0xA9BA, "征"), (0xA9BB, "彿"), (0xA9BC, "彼"), (0xA9BD, "忝"), (0xA9BE, "忠"), (0xA9BF, "忽"),
    (0xA9C0, "念"), (0xA9C1, "忿"), (0xA9C2, "怏"), (0xA9C3, "怔"), (0xA9C4, "怯"), (0xA9C5, "怵"), (0xA9C6, "怖"), (0xA9C7, "怪"),
    (0xA9C8, "怕"), (0xA9C9, "怡"), (0xA9CA, "性"), (0xA9CB, "怩"), (0xA9CC, "怫"), (0xA9CD, "怛"), (0xA9CE, "或"), (0xA9CF, "戕"),
    (0xA9D0, "房"), (0xA9D1, "戾"), (0xA9D2, "所"), (0xA9D3, "承"), (0xA9D4, "拉"), (0xA9D5, "拌"), (0xA9D6, "拄"), (0xA9D7, "抿"),
    (0xA9D8, "拂"), (0xA9D9, "抹"), (0xA9DA, "拒"), (0xA9DB, "招"), (0xA9DC, "披"), (0xA9DD, "拓"), (0xA9DE, "拔"), (0xA9DF, "拋"),
    (0xA9E0, "拈"), (0xA9E1, "抨"), (0xA9E2, "抽"), (0xA9E3, "押"), (0xA9E4, "拐"), (0xA9E5, "拙"), (0xA9E6, "拇"), (0xA9E7, "拍"),
    (0xA9E8, "抵"), (0xA9E9, "拚"), (0xA9EA, "抱"), (0xA9EB, "拘"), (0xA9EC, "拖"), (0xA9ED, "拗"), (0xA9EE, "拆"), (0xA9EF, "抬"),
    (0xA9F0, "拎"), (0xA9F1, "放"), (0xA9F2, "斧"), (0xA9F3, "於"), (0xA9F4, "旺"), (0xA9F5, "昔"), (0xA9F6, "易"), (0xA9F7, "昌"),
    (0xA9F8, "昆"), (0xA9F9, "昂"), (0xA9FA, "明"), (0xA9FB, "昀"), (0xA9FC, "昏"), (0xA9FD, "昕"), (0xA9FE, "昊"), (0xAA40, "昇"),
    (0xAA41, "服"), (0xAA42, "朋"), (0xAA43, "杭"), (0xAA44, "枋"), (0xAA45, "枕"), (0xAA46, "東"), (0xAA47, "果"), (0xAA48, "杳"),
    (0xAA49, "杷"), (0xAA4A, "枇"), (0xAA4B, "枝"), (0xAA4C, "林"), (0xAA4D, "杯"), (0xAA4E, "杰"), (0xAA4F, "板"), (0xAA50, "枉"),
    (0xAA51, "松"), (0xAA52, "析"), (0xAA53, "杵"), (0xAA54, "枚"), (0xAA55, "枓"), (0xAA56, "杼"), (0xAA57, "杪"), (0xAA58, "杲"),
    (0xAA59, "欣"), (0xAA5A, "武"), (0xAA5B, "歧"), (0xAA5C, "歿"), (0xAA5D, "氓"), (0xAA5E, "氛"), (0xAA5F, "泣"), (0xAA60, "注"),
    (0xAA61, "泳"), (0xAA62, "沱"), (0xAA63, "泌"), (0xAA64, "泥"), (0xAA65, "河"), (0xAA66, "沽"), (0xAA67, "沾"), (0xAA68, "沼"),
    (0xAA69, "波"), (0xAA6A, "沫"), (0xAA6B, "法"), (0xAA6C, "泓"), (0xAA6D, "沸"), (0xAA6E, "泄"), (0xAA6F, "油"), (0xAA70, "況"),
    (0xAA71, "沮"), (0xAA72, "泗"), (0xAA73, "泅"), (0xAA74, "泱"), (0xAA75, "沿"), (0xAA76, "治"), (0xAA77, "泡"), (0xAA78, "泛"),
    (0xAA79, "泊"), (0xAA7A, "沬"), (0xAA7B, "泯"), (0xAA7C, "泜"), (0xAA7D, "泖"), (0xAA7E, "泠"), (0xAAA1, "炕"), (0xAAA2, "炎"),
    (0xAAA3, "炒"), (0xAAA4, "炊"), (0xAAA5, "炙"), (0xAAA6, "爬"), (0xAAA7, "爭"), (0xAAA8, "爸"), (0xAAA9, "版"), (0xAAAA, "牧"),
    (0xAAAB, "物"), (0xAAAC, "狀"), (0xAAAD, "狎"), (0xAAAE, "狙"), (0xAAAF, "狗"), (0xAAB0, "狐"), (0xAAB1, "玩"), (0xAAB2, "玨"),
    (0xAAB3, "玟"), (0xAAB4, "玫"), (0xAAB5, "玥"), (0xAAB6, "甽"), (0xAAB7, "疝"), (0xAAB8, "疙"), (0xAAB9, "疚"), (0xAABA, "的"),
    (0xAABB, "盂"), (0xAABC, "盲"), (0xAABD, "直"), (0xAABE, "知"), (0xAABF, "矽"), (0xAAC0, "社"), (0xAAC1, "祀"), (0xAAC2, "祁"),
    (0xAAC3, "秉"), (0xAAC4, "秈"), (0xAAC5, "空"), (0xAAC6, "穹"), (0xAAC7, "竺"), (0xAAC8, "糾"), (0xAAC9, "罔"), (0xAACA, "羌"),
    (0xAACB, "羋"), (0xAACC, "者"), (0xAACD, "肺"), (0xAACE, "肥"), (0xAACF, "肢"), (0xAAD0, "肱"), (0xAAD1, "股"), (0xAAD2, "肫"),
    (0xAAD3, "肩"), (0xAAD4, "肴"), (0xAAD5, "肪"), (0xAAD6, "肯"), (0xAAD7, "臥"), (0xAAD8, "臾"), (0xAAD9, "舍"), (0xAADA, "芳"),
    (0xAADB, "芝"), (0xAADC, "芙"), (0xAADD, "芭"), (0xAADE, "芽"), (0xAADF, "芟"), (0xAAE0, "芹"), (0xAAE1, "花"), (0xAAE2, "芬"),
    (0xAAE3, "芥"), (0xAAE4, "芯"), (0xAAE5, "芸"), (0xAAE6, "芣"), (0xAAE7, "芰"), (0xAAE8, "芾"), (0xAAE9, "芷"), (0xAAEA, "虎"),
    (0xAAEB, "虱"), (0xAAEC, "初"), (0xAAED, "表"), (0xAAEE, "軋"), (0xAAEF, "迎"), (0xAAF0, "返"), (0xAAF1, "近"), (0xAAF2, "邵"),
    (0xAAF3, "邸"), (0xAAF4, "邱"), (0xAAF5, "邶"), (0xAAF6, "采"), (0xAAF7, "金"), (0xAAF8, "長"), (0xAAF9, "門"), (0xAAFA, "阜"),
    (0xAAFB, "陀"), (0xAAFC, "阿"), (0xAAFD, "阻"), (0xAAFE, "附"), (0xAB40, "陂"), (0xAB41, "隹"), (0xAB42, "雨"), (0xAB43, "青"),
    (0xAB44, "非"), (0xAB45, "亟"), (0xAB46, "亭"), (0xAB47, "亮"), (0xAB48, "信"), (0xAB49, "侵"), (0xAB4A, "侯"), (0xAB4B, "便"),
    (0xAB4C, "俠"), (0xAB4D, "俑"), (0xAB4E, "俏"), (0xAB4F, "保"), (0xAB50, "促"), (0xAB51, "侶"), (0xAB52, "俘"), (0xAB53, "俟"),
    (0xAB54, "俊"), (0xAB55, "俗"), (0xAB56, "侮"), (0xAB57, "俐"), (0xAB58, "俄"), (0xAB59, "係"), (0xAB5A, "俚"), (0xAB5B, "俎"),
    (0xAB5C, "俞"), (0xAB5D, "侷"), (0xAB5E, "兗"), (0xAB5F, "冒"), (0xAB60, "冑"), (0xAB61, "冠"), (0xAB62, "剎"), (0xAB63, "剃"),
    (0xAB64, "削"), (0xAB65, "前"), (0xAB66, "剌"), (0xAB67, "剋"), (0xAB68, "則"), (0xAB69, "勇"), (0xAB6A, "勉"), (0xAB6B, "勃"),
    (0xAB6C, "勁"), (0xAB6D, "匍"), (0xAB6E, "南"), (0xAB6F, "卻"), (0xAB70, "厚"), (0xAB71, "叛"), (0xAB72, "咬"), (0xAB73, "哀"),
    (0xAB74, "咨"), (0xAB75, "哎"), (0xAB76, "哉"), (0xAB77, "咸"), (0xAB78, "咦"), (0xAB79, "咳"), (0xAB7A, "哇"), (0xAB7B, "哂"),
    (0xAB7C, "咽"), (0xAB7D, "咪"), (0xAB7E, "品"), (0xABA1, "哄"), (0xABA2, "哈"), (0xABA3, "咯"), (0xABA4, "咫"), (0xABA5, "咱"),
    (0xABA6, "咻"), (0xABA7, "咩"), (0xABA8, "咧"), (0xABA9, "咿"), (0xABAA, "囿"), (0xABAB, "垂"), (0xABAC, "型"), (0xABAD, "垠"),
    (0xABAE, "垣"), (0xABAF, "垢"), (0xABB0, "城"), (0xABB1, "垮"), (0xABB2, "垓"), (0xABB3, "奕"), (0xABB4, "契"), (0xABB5, "奏"),
    (0xABB6, "奎"), (0xABB7, "奐"), (0xABB8, "姜"), (0xABB9, "姘"), (0xABBA, "姿"), (0xABBB, "姣"), (0xABBC, "姨"), (0xABBD, "娃"),
    (0xABBE, "姥"), (0xABBF, "姪"), (0xABC0, "姚"), (0xABC1, "姦"), (0xABC2, "威"), (0xABC3, "姻"), (0xABC4, "孩"), (0xABC5, "宣"),
    (0xABC6, "宦"), (0xABC7, "室"), (0xABC8, "客"), (0xABC9, "宥"), (0xABCA, "封"), (0xABCB, "屎"), (0xABCC, "屏"), (0xABCD, "屍"),
    (0xABCE, "屋"), (0xABCF, "峙"), (0xABD0, "峒"), (0xABD1, "巷"), (0xABD2, "帝"), (0xABD3, "帥"), (0xABD4, "帟"), (0xABD5, "幽"),
    (0xABD6, "庠"), (0xABD7, "度"), (0xABD8, "建"), (0xABD9, "弈"), (0xABDA, "弭"), (0xABDB, "彥"), (0xABDC, "很"), (0xABDD, "待"),
    (0xABDE, "徊"), (0xABDF, "律"), (0xABE0, "徇"), (0xABE1, "後"), (0xABE2, "徉"), (0xABE3, "怒"), (0xABE4, "思"), (0xABE5, "怠"),
    (0xABE6, "急"), (0xABE7, "怎"), (0xABE8, "怨"), (0xABE9, "恍"), (0xABEA, "恰"), (0xABEB, "恨"), (0xABEC, "恢"), (0xABED, "恆"),
    (0xABEE, "恃"), (0xABEF, "恬"), (0xABF0, "恫"), (0xABF1, "恪"), (0xABF2, "恤"), (0xABF3, "扁"), (0xABF4, "拜"), (0xABF5, "挖"),
    (0xABF6, "按"), (0xABF7, "拼"), (0xABF8, "拭"), (0xABF9, "持"), (0xABFA, "拮"), (0xABFB, "拽"), (0xABFC, "指"), (0xABFD, "拱"),
    (0xABFE, "拷"), (0xAC40, "拯"), (0xAC41, "括"), (0xAC42, "拾"), (0xAC43, "拴"), (0xAC44, "挑"), (0xAC45, "挂"), (0xAC46, "政"),
    (0xAC47, "故"), (0xAC48, "斫"), (0xAC49, "施"), (0xAC4A, "既"), (0xAC4B, "春"), (0xAC4C, "昭"), (0xAC4D, "映"), (0xAC4E, "昧"),
    (0xAC4F, "是"), (0xAC50, "星"), (0xAC51, "昨"), (0xAC52, "昱"), (0xAC53, "昤"), (0xAC54, "曷"), (0xAC55, "柿"), (0xAC56, "染"),
    (0xAC57, "柱"), (0xAC58, "柔"), (0xAC59, "某"), (0xAC5A, "柬"), (0xAC5B, "架"), (0xAC5C, "枯"), (0xAC5D, "柵"), (0xAC5E, "柩"),
    (0xAC5F, "柯"), (0xAC60, "柄"), (0xAC61, "柑"), (0xAC62, "枴"), (0xAC63, "柚"), (0xAC64, "查"), (0xAC65, "枸"), (0xAC66, "柏"),
    (0xAC67, "柞"), (0xAC68, "柳"), (0xAC69, "枰"), (0xAC6A, "柙"), (0xAC6B, "柢"), (0xAC6C, "柝"), (0xAC6D, "柒"), (0xAC6E, "歪"),
    (0xAC6F, "殃"), (0xAC70, "殆"), (0xAC71, "段"), (0xAC72, "毒"), (0xAC73, "毗"), (0xAC74, "氟"), (0xAC75, "泉"), (0xAC76, "洋"),
    (0xAC77, "洲"), (0xAC78, "洪"), (0xAC79, "流"), (0xAC7A, "津"), (0xAC7B, "洌"), (0xAC7C, "洱"), (0xAC7D, "洞"), (0xAC7E, "洗"),
    (0xACA1, "活"), (0xACA2, "洽"), (0xACA3, "派"), (0xACA4, "洶"), (0xACA5, "洛"), (0xACA6, "泵"), (0xACA7, "洹"), (0xACA8, "洧"),
    (0xACA9, "洸"), (0xACAA, "洩"), (0xACAB, "洮"), (0xACAC, "洵"), (0xACAD, "洎"), (0xACAE, "洫"), (0xACAF, "炫"), (0xACB0, "為"),
    (0xACB1, "炳"), (0xACB2, "炬"), (0xACB3, "炯"), (0xACB4, "炭"), (0xACB5, "炸"), (0xACB6, "炮"), (0xACB7, "炤"), (0xACB8, "爰"),
    (0xACB9, "牲"), (0xACBA, "牯"), (0xACBB, "牴"), (0xACBC, "狩"), (0xACBD, "狠"), (0xACBE, "狡"), (0xACBF, "玷"), (0xACC0, "珊"),
    (0xACC1, "玻"), (0xACC2, "玲"), (0xACC3, "珍"), (0xACC4, "珀"), (0xACC5, "玳"), (0xACC6, "甚"), (0xACC7, "甭"), (0xACC8, "畏"),
    (0xACC9, "界"), (0xACCA, "畎"), (0xACCB, "畋"), (0xACCC, "疫"), (0xACCD, "疤"), (0xACCE, "疥"), (0xACCF, "疢"), (0xACD0, "疣"),
    (0xACD1, "癸"), (0xACD2, "皆"), (0xACD3, "皇"), (0xACD4, "皈"), (0xACD5, "盈"), (0xACD6, "盆"), (0xACD7, "盃"), (0xACD8, "盅"),
    (0xACD9, "省"), (0xACDA, "盹"), (0xACDB, "相"), (0xACDC, "眉"), (0xACDD, "看"), (0xACDE, "盾"), (0xACDF, "盼"), (0xACE0, "眇"),
    (0xACE1, "矜"), (0xACE2, "砂"), (0xACE3, "研"), (0xACE4, "砌"), (0xACE5, "砍"), (0xACE6, "祆"), (0xACE7, "祉"), (0xACE8, "祈"),
    (0xACE9, "祇"), (0xACEA, "禹"), (0xACEB, "禺"), (0xACEC, "科"), (0xACED, "秒"), (0xACEE, "秋"), (0xACEF, "穿"), (0xACF0, "突"),
    (0xACF1, "竿"), (0xACF2, "竽"), (0xACF3, "籽"), (0xACF4, "紂"), (0xACF5, "紅"), (0xACF6, "紀"), (0xACF7, "紉"), (0xACF8, "紇"),
    (0xACF9, "約"), (0xACFA, "紆"), (0xACFB, "缸"), (0xACFC, "美"), (0xACFD, "羿"), (0xACFE, "耄"), (0xAD40, "耐"), (0xAD41, "耍"),
    (0xAD42, "耑"), (0xAD43, "耶"), (0xAD44, "胖"), (0xAD45, "胥"), (0xAD46, "胚"), (0xAD47, "胃"), (0xAD48, "胄"), (0xAD49, "背"),
    (0xAD4A, "胡"), (0xAD4B, "胛"), (0xAD4C, "胎"), (0xAD4D, "胞"), (0xAD4E, "胤"), (0xAD4F, "胝"), (0xAD50, "致"), (0xAD51, "舢"),
    (0xAD52, "苧"), (0xAD53, "范"), (0xAD54, "茅"), (0xAD55, "苣"), (0xAD56, "苛"), (0xAD57, "苦"), (0xAD58, "茄"), (0xAD59, "若"),
    (0xAD5A, "茂"), (0xAD5B, "茉"), (0xAD5C, "苒"), (0xAD5D, "苗"), (0xAD5E, "英"), (0xAD5F, "茁"), (0xAD60, "苜"), (0xAD61, "苔"),
    (0xAD62, "苑"), (0xAD63, "苞"), (0xAD64, "苓"), (0xAD65, "苟"), (0xAD66, "苯"), (0xAD67, "茆"), (0xAD68, "虐"), (0xAD69, "虹"),
    (0xAD6A, "虻"), (0xAD6B, "虺"), (0xAD6C, "衍"), (0xAD6D, "衫"), (0xAD6E, "要"), (0xAD6F, "觔"), (0xAD70, "計"), (0xAD71, "訂"),
    (0xAD72, "訃"), (0xAD73, "貞"), (0xAD74, "負"), (0xAD75, "赴"), (0xAD76, "赳"), (0xAD77, "趴"), (0xAD78, "軍"), (0xAD79, "軌"),
    (0xAD7A, "述"), (0xAD7B, "迦"), (0xAD7C, "迢"), (0xAD7D, "迪"), (0xAD7E, "迥"), (0xADA1, "迭"), (0xADA2, "迫"), (0xADA3, "迤"),
    (0xADA4, "迨"), (0xADA5, "郊"), (0xADA6, "郎"), (0xADA7, "郁"), (0xADA8, "郃"), (0xADA9, "酋"), (0xADAA, "酊"), (0xADAB, "重"),
    (0xADAC, "閂"), (0xADAD, "限"), (0xADAE, "陋"), (0xADAF, "陌"), (0xADB0, "降"), (0xADB1, "面"), (0xADB2, "革"), (0xADB3, "韋"),
    (0xADB4, "韭"), (0xADB5, "音"), (0xADB6, "頁"), (0xADB7, "風"), (0xADB8, "飛"), (0xADB9, "食"), (0xADBA, "首"), (0xADBB, "香"),
    (0xADBC, "乘"), (0xADBD, "亳"), (0xADBE, "倌"), (0xADBF, "倍"), (0xADC0, "倣"), (0xADC1, "俯"), (0xADC2, "倦"), (0xADC3, "倥"),
    (0xADC4, "俸"), (0xADC5, "倩"), (0xADC6, "倖"), (0xADC7, "倆"), (0xADC8, "值"), (0xADC9, "借"), (0xADCA, "倚"), (0xADCB, "倒"),
    (0xADCC, "們"), (0xADCD, "俺"), (0xADCE, "倀"), (0xADCF, "倔"), (0xADD0, "倨"), (0xADD1, "俱"), (0xADD2, "倡"), (0xADD3, "個"),
    (0xADD4, "候"), (0xADD5, "倘"), (0xADD6, "俳"), (0xADD7, "修"), (0xADD8, "倭"), (0xADD9, "倪"), (0xADDA, "俾"), (0xADDB, "倫"),
    (0xADDC, "倉"), (0xADDD, "兼"), (0xADDE, "冤"), (0xADDF, "冥"), (0xADE0, "冢"), (0xADE1, "凍"), (0xADE2, "凌"), (0xADE3, "准"),
    (0xADE4, "凋"), (0xADE5, "剖"), (0xADE6, "剜"), (0xADE7, "剔"), (0xADE8, "剛"), (0xADE9, "剝"), (0xADEA, "匪"), (0xADEB, "卿"),
    (0xADEC, "原"), (0xADED, "厝"), (0xADEE, "叟"), (0xADEF, "哨"), (0xADF0, "唐"), (0xADF1, "唁"), (0xADF2, "唷"), (0xADF3, "哼"),
    (0xADF4, "哥"), (0xADF5, "哲"), (0xADF6, "唆"), (0xADF7, "哺"), (0xADF8, "唔"), (0xADF9, "哩"), (0xADFA, "哭"), (0xADFB, "員"),
    (0xADFC, "唉"), (0xADFD, "哮"), (0xADFE, "哪"), (0xAE40, "哦"), (0xAE41, "唧"), (0xAE42, "唇"), (0xAE43, "哽"), (0xAE44, "唏"),
    (0xAE45, "圃"), (0xAE46, "圄"), (0xAE47, "埂"), (0xAE48, "埔"), (0xAE49, "埋"), (0xAE4A, "埃"), (0xAE4B, "堉"), (0xAE4C, "夏"),
    (0xAE4D, "套"), (0xAE4E, "奘"), (0xAE4F, "奚"), (0xAE50, "娑"), (0xAE51, "娘"), (0xAE52, "娜"), (0xAE53, "娟"), (0xAE54, "娛"),
    (0xAE55, "娓"), (0xAE56, "姬"), (0xAE57, "娠"), (0xAE58, "娣"), (0xAE59, "娩"), (0xAE5A, "娥"), (0xAE5B, "娌"), (0xAE5C, "娉"),
    (0xAE5D, "孫"), (0xAE5E, "屘"), (0xAE5F, "宰"), (0xAE60, "害"), (0xAE61, "家"), (0xAE62, "宴"), (0xAE63, "宮"), (0xAE64, "宵"),
    (0xAE65, "容"), (0xAE66, "宸"), (0xAE67, "射"), (0xAE68, "屑"), (0xAE69, "展"), (0xAE6A, "屐"), (0xAE6B, "峭"), (0xAE6C, "峽"),
    (0xAE6D, "峻"), (0xAE6E, "峪"), (0xAE6F, "峨"), (0xAE70, "峰"), (0xAE71, "島"), (0xAE72, "崁"), (0xAE73, "峴"), (0xAE74, "差"),
    (0xAE75, "席"), (0xAE76, "師"), (0xAE77, "庫"), (0xAE78, "庭"), (0xAE79, "座"), (0xAE7A, "弱"), (0xAE7B, "徒"), (0xAE7C, "徑"),
    (0xAE7D, "徐"), (0xAE7E, "恙"), (0xAEA1, "恣"), (0xAEA2, "恥"), (0xAEA3, "恐"), (0xAEA4, "恕"), (0xAEA5, "恭"), (0xAEA6, "恩"),
    (0xAEA7, "息"), (0xAEA8, "悄"), (0xAEA9, "悟"), (0xAEAA, "悚"), (0xAEAB, "悍"), (0xAEAC, "悔"), (0xAEAD, "悌"), (0xAEAE, "悅"),
    (0xAEAF, "悖"), (0xAEB0, "扇"), (0xAEB1, "拳"), (0xAEB2, "挈"), (0xAEB3, "拿"), (0xAEB4, "捎"), (0xAEB5, "挾"), (0xAEB6, "振"),
    (0xAEB7, "捕"), (0xAEB8, "捂"), (0xAEB9, "捆"), (0xAEBA, "捏"), (0xAEBB, "捉"), (0xAEBC, "挺"), (0xAEBD, "捐"), (0xAEBE, "挽"),
    (0xAEBF, "挪"), (0xAEC0, "挫"), (0xAEC1, "挨"), (0xAEC2, "捍"), (0xAEC3, "捌"), (0xAEC4, "效"), (0xAEC5, "敉"), (0xAEC6, "料"),
    (0xAEC7, "旁"), (0xAEC8, "旅"), (0xAEC9, "時"), (0xAECA, "晉"), (0xAECB, "晏"), (0xAECC, "晃"), (0xAECD, "晒"), (0xAECE, "晌"),
    (0xAECF, "晅"), (0xAED0, "晁"), (0xAED1, "書"), (0xAED2, "朔"), (0xAED3, "朕"), (0xAED4, "朗"), (0xAED5, "校"), (0xAED6, "核"),
    (0xAED7, "案"), (0xAED8, "框"), (0xAED9, "桓"), (0xAEDA, "根"), (0xAEDB, "桂"), (0xAEDC, "桔"), (0xAEDD, "栩"), (0xAEDE, "梳"),
    (0xAEDF, "栗"), (0xAEE0, "桌"), (0xAEE1, "桑"), (0xAEE2, "栽"), (0xAEE3, "柴"), (0xAEE4, "桐"), (0xAEE5, "桀"), (0xAEE6, "格"),
    (0xAEE7, "桃"), (0xAEE8, "株"), (0xAEE9, "桅"), (0xAEEA, "栓"), (0xAEEB, "栘"), (0xAEEC, "桁"), (0xAEED, "殊"), (0xAEEE, "殉"),
    (0xAEEF, "殷"), (0xAEF0, "氣"), (0xAEF1, "氧"), (0xAEF2, "氨"), (0xAEF3, "氦"), (0xAEF4, "氤"), (0xAEF5, "泰"), (0xAEF6, "浪"),
    (0xAEF7, "涕"), (0xAEF8, "消"), (0xAEF9, "涇"), (0xAEFA, "浦"), (0xAEFB, "浸"), (0xAEFC, "海"), (0xAEFD, "浙"), (0xAEFE, "涓"),
    (0xAF40, "浬"), (0xAF41, "涉"), (0xAF42, "浮"), (0xAF43, "浚"), (0xAF44, "浴"), (0xAF45, "浩"), (0xAF46, "涌"), (0xAF47, "涊"),
    (0xAF48, "浹"), (0xAF49, "涅"), (0xAF4A, "浥"), (0xAF4B, "涔"), (0xAF4C, "烊"), (0xAF4D, "烘"), (0xAF4E, "烤"), (0xAF4F, "烙"),
    (0xAF50, "烈"), (0xAF51, "烏"), (0xAF52, "爹"), (0xAF53, "特"), (0xAF54, "狼"), (0xAF55, "狹"), (0xAF56, "狽"), (0xAF57, "狸"),
    (0xAF58, "狷"), (0xAF59, "玆"), (0xAF5A, "班"), (0xAF5B, "琉"), (0xAF5C, "珮"), (0xAF5D, "珠"), (0xAF5E, "珪"), (0xAF5F, "珞"),
    (0xAF60, "畔"), (0xAF61, "畝"), (0xAF62, "畜"), (0xAF63, "畚"), (0xAF64, "留"), (0xAF65, "疾"), (0xAF66, "病"), (0xAF67, "症"),
    (0xAF68, "疲"), (0xAF69, "疳"), (0xAF6A, "疽"), (0xAF6B, "疼"), (0xAF6C, "疹"), (0xAF6D, "痂"), (0xAF6E, "疸"), (0xAF6F, "皋"),
    (0xAF70, "皰"), (0xAF71, "益"), (0xAF72, "盍"), (0xAF73, "盎"), (0xAF74, "眩"), (0xAF75, "真"), (0xAF76, "眠"), (0xAF77, "眨"),
    (0xAF78, "矩"), (0xAF79, "砰"), (0xAF7A, "砧"), (0xAF7B, "砸"), (0xAF7C, "砝"), (0xAF7D, "破"), (0xAF7E, "砷"), (0xAFA1, "砥"),
    (0xAFA2, "砭"), (0xAFA3, "砠"), (0xAFA4, "砟"), (0xAFA5, "砲"), (0xAFA6, "祕"), (0xAFA7, "祐"), (0xAFA8, "祠"), (0xAFA9, "祟"),
    (0xAFAA, "祖"), (0xAFAB, "神"), (0xAFAC, "祝"), (0xAFAD, "祗"), (0xAFAE, "祚"), (0xAFAF, "秤"), (0xAFB0, "秣"), (0xAFB1, "秧"),
    (0xAFB2, "租"), (0xAFB3, "秦"), (0xAFB4, "秩"), (0xAFB5, "秘"), (0xAFB6, "窄"), (0xAFB7, "窈"), (0xAFB8, "站"), (0xAFB9, "笆"),
    (0xAFBA, "笑"), (0xAFBB, "粉"), (0xAFBC, "紡"), (0xAFBD, "紗"), (0xAFBE, "紋"), (0xAFBF, "紊"), (0xAFC0, "素"), (0xAFC1, "索"),
    (0xAFC2, "純"), (0xAFC3, "紐"), (0xAFC4, "紕"), (0xAFC5, "級"), (0xAFC6, "紜"), (0xAFC7, "納"), (0xAFC8, "紙"), (0xAFC9, "紛"),
    (0xAFCA, "缺"), (0xAFCB, "罟"), (0xAFCC, "羔"), (0xAFCD, "翅"), (0xAFCE, "翁"), (0xAFCF, "耆"), (0xAFD0, "耘"), (0xAFD1, "耕"),
    (0xAFD2, "耙"), (0xAFD3, "耗"), (0xAFD4, "耽"), (0xAFD5, "耿"), (0xAFD6, "胱"), (0xAFD7, "脂"), (0xAFD8, "胰"), (0xAFD9, "脅"),
    (0xAFDA, "胭"), (0xAFDB, "胴"), (0xAFDC, "脆"), (0xAFDD, "胸"), (0xAFDE, "胳"), (0xAFDF, "脈"), (0xAFE0, "能"), (0xAFE1, "脊"),
    (0xAFE2, "胼"), (0xAFE3, "胯"), (0xAFE4, "臭"), (0xAFE5, "臬"), (0xAFE6, "舀"), (0xAFE7, "舐"), (0xAFE8, "航"), (0xAFE9, "舫"),
    (0xAFEA, "舨"), (0xAFEB, "般"), (0xAFEC, "芻"), (0xAFED, "茫"), (0xAFEE, "荒"), (0xAFEF, "荔"), (0xAFF0, "荊"), (0xAFF1, "茸"),
    (0xAFF2, "荐"), (0xAFF3, "草"), (0xAFF4, "茵"), (0xAFF5, "茴"), (0xAFF6, "荏"), (0xAFF7, "茲"), (0xAFF8, "茹"), (0xAFF9, "茶"),
    (0xAFFA, "茗"), (0xAFFB, "荀"), (0xAFFC, "茱"), (0xAFFD, "茨"), (0xAFFE, "荃"), (0xB040, "虔"), (0xB041, "蚊"), (0xB042, "蚪"),
    (0xB043, "蚓"), (0xB044, "蚤"), (0xB045, "蚩"), (0xB046, "蚌"), (0xB047, "蚣"), (0xB048, "蚜"), (0xB049, "衰"), (0xB04A, "衷"),
    (0xB04B, "袁"), (0xB04C, "袂"), (0xB04D, "衽"), (0xB04E, "衹"), (0xB04F, "記"), (0xB050, "訐"), (0xB051, "討"), (0xB052, "訌"),
    (0xB053, "訕"), (0xB054, "訊"), (0xB055, "託"), (0xB056, "訓"), (0xB057, "訖"), (0xB058, "訏"), (0xB059, "訑"), (0xB05A, "豈"),
    (0xB05B, "豺"), (0xB05C, "豹"), (0xB05D, "財"), (0xB05E, "貢"), (0xB05F, "起"), (0xB060, "躬"), (0xB061, "軒"), (0xB062, "軔"),
    (0xB063, "軏"), (0xB064, "辱"), (0xB065, "送"), (0xB066, "逆"), (0xB067, "迷"), (0xB068, "退"), (0xB069, "迺"), (0xB06A, "迴"),
    (0xB06B, "逃"), (0xB06C, "追"), (0xB06D, "逅"), (0xB06E, "迸"), (0xB06F, "邕"), (0xB070, "郡"), (0xB071, "郝"), (0xB072, "郢"),
    (0xB073, "酒"), (0xB074, "配"), (0xB075, "酌"), (0xB076, "釘"), (0xB077, "針"), (0xB078, "釗"), (0xB079, "釜"), (0xB07A, "釙"),
    (0xB07B, "閃"), (0xB07C, "院"), (0xB07D, "陣"), (0xB07E, "陡"), (0xB0A1, "陛"), (0xB0A2, "陝"), (0xB0A3, "除"), (0xB0A4, "陘"),
    (0xB0A5, "陞"), (0xB0A6, "隻"), (0xB0A7, "飢"), (0xB0A8, "馬"), (0xB0A9, "骨"), (0xB0AA, "高"), (0xB0AB, "鬥"), (0xB0AC, "鬲"),
    (0xB0AD, "鬼"), (0xB0AE, "乾"), (0xB0AF, "偺"), (0xB0B0, "偽"), (0xB0B1, "停"), (0xB0B2, "假"), (0xB0B3, "偃"), (0xB0B4, "偌"),
    (0xB0B5, "做"), (0xB0B6, "偉"), (0xB0B7, "健"), (0xB0B8, "偶"), (0xB0B9, "偎"), (0xB0BA, "偕"), (0xB0BB, "偵"), (0xB0BC, "側"),
    (0xB0BD, "偷"), (0xB0BE, "偏"), (0xB0BF, "倏"), (0xB0C0, "偯"), (0xB0C1, "偭"), (0xB0C2, "兜"), (0xB0C3, "冕"), (0xB0C4, "凰"),
    (0xB0C5, "剪"), (0xB0C6, "副"), (0xB0C7, "勒"), (0xB0C8, "務"), (0xB0C9, "勘"), (0xB0CA, "動"), (0xB0CB, "匐"), (0xB0CC, "匏"),
    (0xB0CD, "匙"), (0xB0CE, "匿"), (0xB0CF, "區"), (0xB0D0, "匾"), (0xB0D1, "參"), (0xB0D2, "曼"), (0xB0D3, "商"), (0xB0D4, "啪"),
    (0xB0D5, "啦"), (0xB0D6, "啄"), (0xB0D7, "啞"), (0xB0D8, "啡"), (0xB0D9, "啃"), (0xB0DA, "啊"), (0xB0DB, "唱"), (0xB0DC, "啖"),
    (0xB0DD, "問"), (0xB0DE, "啕"), (0xB0DF, "唯"), (0xB0E0, "啤"), (0xB0E1, "唸"), (0xB0E2, "售"), (0xB0E3, "啜"), (0xB0E4, "唬"),
    (0xB0E5, "啣"), (0xB0E6, "唳"), (0xB0E7, "啁"), (0xB0E8, "啗"), (0xB0E9, "圈"), (0xB0EA, "國"), (0xB0EB, "圉"), (0xB0EC, "域"),
    (0xB0ED, "堅"), (0xB0EE, "堊"), (0xB0EF, "堆"), (0xB0F0, "埠"), (0xB0F1, "埤"), (0xB0F2, "基"), (0xB0F3, "堂"), (0xB0F4, "堵"),
    (0xB0F5, "執"), (0xB0F6, "培"), (0xB0F7, "夠"), (0xB0F8, "奢"), (0xB0F9, "娶"), (0xB0FA, "婁"), (0xB0FB, "婉"), (0xB0FC, "婦"),
    (0xB0FD, "婪"), (0xB0FE, "婀"), (0xB140, "娼"), (0xB141, "婢"), (0xB142, "婚"), (0xB143, "婆"), (0xB144, "婊"), (0xB145, "孰"),
    (0xB146, "寇"), (0xB147, "寅"), (0xB148, "寄"), (0xB149, "寂"), (0xB14A, "宿"), (0xB14B, "密"), (0xB14C, "尉"), (0xB14D, "專"),
    (0xB14E, "將"), (0xB14F, "屠"), (0xB150, "屜"), (0xB151, "屝"), (0xB152, "崇"), (0xB153, "崆"), (0xB154, "崎"), (0xB155, "崛"),
    (0xB156, "崖"), (0xB157, "崢"), (0xB158, "崑"), (0xB159, "崩"), (0xB15A, "崔"), (0xB15B, "崙"), (0xB15C, "崤"), (0xB15D, "崧"),
    (0xB15E, "崗"), (0xB15F, "巢"), (0xB160, "常"), (0xB161, "帶"), (0xB162, "帳"), (0xB163, "帷"), (0xB164, "康"), (0xB165, "庸"),
    (0xB166, "庶"), (0xB167, "庵"), (0xB168, "庾"), (0xB169, "張"), (0xB16A, "強"), (0xB16B, "彗"), (0xB16C, "彬"), (0xB16D, "彩"),
    (0xB16E, "彫"), (0xB16F, "得"), (0xB170, "徙"), (0xB171, "從"), (0xB172, "徘"), (0xB173, "御"), (0xB174, "徠"), (0xB175, "徜"),
    (0xB176, "恿"), (0xB177, "患"), (0xB178, "悉"), (0xB179, "悠"), (0xB17A, "您"), (0xB17B, "惋"), (0xB17C, "悴"), (0xB17D, "惦"),
    (0xB17E, "悽"), (0xB1A1, "情"), (0xB1A2, "悻"), (0xB1A3, "悵"), (0xB1A4, "惜"), (0xB1A5, "悼"), (0xB1A6, "惘"), (0xB1A7, "惕"),
    (0xB1A8, "惆"), (0xB1A9, "惟"), (0xB1AA, "悸"), (0xB1AB, "惚"), (0xB1AC, "惇"), (0xB1AD, "戚"), (0xB1AE, "戛"), (0xB1AF, "扈"),
    (0xB1B0, "掠"), (0xB1B1, "控"), (0xB1B2, "捲"), (0xB1B3, "掖"), (0xB1B4, "探"), (0xB1B5, "接"), (0xB1B6, "捷"), (0xB1B7, "捧"),
    (0xB1B8, "掘"), (0xB1B9, "措"), (0xB1BA, "捱"), (0xB1BB, "掩"), (0xB1BC, "掉"), (0xB1BD, "掃"), (0xB1BE, "掛"), (0xB1BF, "捫"),
    (0xB1C0, "推"), (0xB1C1, "掄"), (0xB1C2, "授"), (0xB1C3, "掙"), (0xB1C4, "採"), (0xB1C5, "掬"), (0xB1C6, "排"), (0xB1C7, "掏"),
    (0xB1C8, "掀"), (0xB1C9, "捻"), (0xB1CA, "捩"), (0xB1CB, "捨"), (0xB1CC, "捺"), (0xB1CD, "敝"), (0xB1CE, "敖"), (0xB1CF, "救"),
    (0xB1D0, "教"), (0xB1D1, "敗"), (0xB1D2, "啟"), (0xB1D3, "敏"), (0xB1D4, "敘"), (0xB1D5, "敕"), (0xB1D6, "敔"), (0xB1D7, "斜"),
    (0xB1D8, "斛"), (0xB1D9, "斬"), (0xB1DA, "族"), (0xB1DB, "旋"), (0xB1DC, "旌"), (0xB1DD, "旎"), (0xB1DE, "晝"), (0xB1DF, "晚"),
    (0xB1E0, "晤"), (0xB1E1, "晨"), (0xB1E2, "晦"), (0xB1E3, "晞"), (0xB1E4, "曹"), (0xB1E5, "勗"), (0xB1E6, "望"), (0xB1E7, "梁"),
    (0xB1E8, "梯"), (0xB1E9, "梢"), (0xB1EA, "梓"), (0xB1EB, "梵"), (0xB1EC, "桿"), (0xB1ED, "桶"), (0xB1EE, "梱"), (0xB1EF, "梧"),
    (0xB1F0, "梗"), (0xB1F1, "械"), (0xB1F2, "梃"), (0xB1F3, "棄"), (0xB1F4, "梭"), (0xB1F5, "梆"), (0xB1F6, "梅"), (0xB1F7, "梔"),
    (0xB1F8, "條"), (0xB1F9, "梨"), (0xB1FA, "梟"), (0xB1FB, "梡"), (0xB1FC, "梂"), (0xB1FD, "欲"), (0xB1FE, "殺"), (0xB240, "毫"),
    (0xB241, "毬"), (0xB242, "氫"), (0xB243, "涎"), (0xB244, "涼"), (0xB245, "淳"), (0xB246, "淙"), (0xB247, "液"), (0xB248, "淡"),
    (0xB249, "淌"), (0xB24A, "淤"), (0xB24B, "添"), (0xB24C, "淺"), (0xB24D, "清"), (0xB24E, "淇"), (0xB24F, "淋"), (0xB250, "涯"),
    (0xB251, "淑"), (0xB252, "涮"), (0xB253, "淞"), (0xB254, "淹"), (0xB255, "涸"), (0xB256, "混"), (0xB257, "淵"), (0xB258, "淅"),
    (0xB259, "淒"), (0xB25A, "渚"), (0xB25B, "涵"), (0xB25C, "淚"), (0xB25D, "淫"), (0xB25E, "淘"), (0xB25F, "淪"), (0xB260, "深"),
    (0xB261, "淮"), (0xB262, "淨"), (0xB263, "淆"), (0xB264, "淄"), (0xB265, "涪"), (0xB266, "淬"), (0xB267, "涿"), (0xB268, "淦"),
    (0xB269, "烹"), (0xB26A, "焉"), (0xB26B, "焊"), (0xB26C, "烽"), (0xB26D, "烯"), (0xB26E, "爽"), (0xB26F, "牽"), (0xB270, "犁"),
    (0xB271, "猜"), (0xB272, "猛"), (0xB273, "猖"), (0xB274, "猓"), (0xB275, "猙"), (0xB276, "率"), (0xB277, "琅"), (0xB278, "琊"),
    (0xB279, "球"), (0xB27A, "理"), (0xB27B, "現"), (0xB27C, "琍"), (0xB27D, "瓠"), (0xB27E, "瓶"), (0xB2A1, "瓷"), (0xB2A2, "甜"),
    (0xB2A3, "產"), (0xB2A4, "略"), (0xB2A5, "畦"), (0xB2A6, "畢"), (0xB2A7, "異"), (0xB2A8, "疏"), (0xB2A9, "痔"), (0xB2AA, "痕"),
    (0xB2AB, "疵"), (0xB2AC, "痊"), (0xB2AD, "痍"), (0xB2AE, "皎"), (0xB2AF, "盔"), (0xB2B0, "盒"), (0xB2B1, "盛"), (0xB2B2, "眷"),
    (0xB2B3, "眾"), (0xB2B4, "眼"), (0xB2B5, "眶"), (0xB2B6, "眸"), (0xB2B7, "眺"), (0xB2B8, "硫"), (0xB2B9, "硃"), (0xB2BA, "硎"),
    (0xB2BB, "祥"), (0xB2BC, "票"), (0xB2BD, "祭"), (0xB2BE, "移"), (0xB2BF, "窒"), (0xB2C0, "窕"), (0xB2C1, "笠"), (0xB2C2, "笨"),
    (0xB2C3, "笛"), (0xB2C4, "第"), (0xB2C5, "符"), (0xB2C6, "笙"), (0xB2C7, "笞"), (0xB2C8, "笮"), (0xB2C9, "粒"), (0xB2CA, "粗"),
    (0xB2CB, "粕"), (0xB2CC, "絆"), (0xB2CD, "絃"), (0xB2CE, "統"), (0xB2CF, "紮"), (0xB2D0, "紹"), (0xB2D1, "紼"), (0xB2D2, "絀"),
    (0xB2D3, "細"), (0xB2D4, "紳"), (0xB2D5, "組"), (0xB2D6, "累"), (0xB2D7, "終"), (0xB2D8, "紲"), (0xB2D9, "紱"), (0xB2DA, "缽"),
    (0xB2DB, "羞"), (0xB2DC, "羚"), (0xB2DD, "翌"), (0xB2DE, "翎"), (0xB2DF, "習"), (0xB2E0, "耜"), (0xB2E1, "聊"), (0xB2E2, "聆"),
    (0xB2E3, "脯"), (0xB2E4, "脖"), (0xB2E5, "脣"), (0xB2E6, "脫"), (0xB2E7, "脩"), (0xB2E8, "脰"), (0xB2E9, "脤"), (0xB2EA, "舂"),
    (0xB2EB, "舵"), (0xB2EC, "舷"), (0xB2ED, "舶"), (0xB2EE, "船"), (0xB2EF, "莎"), (0xB2F0, "莞"), (0xB2F1, "莘"), (0xB2F2, "荸"),
    (0xB2F3, "莢"), (0xB2F4, "莖"), (0xB2F5, "莽"), (0xB2F6, "莫"), (0xB2F7, "莒"), (0xB2F8, "莊"), (0xB2F9, "莓"), (0xB2FA, "莉"),
    (0xB2FB, "莠"), (0xB2FC, "荷"), (0xB2FD, "荻"), (0xB2FE, "荼"), (0xB340, "莆"), (0xB341, "莧"), (0xB342, "處"), (0xB343, "彪"),
    (0xB344, "蛇"), (0xB345, "蛀"), (0xB346, "蚶"), (0xB347, "蛄"), (0xB348, "蚵"), (0xB349, "蛆"), (0xB34A, "蛋"), (0xB34B, "蚱"),
    (0xB34C, "蚯"), (0xB34D, "蛉"), (0xB34E, "術"), (0xB34F, "袞"), (0xB350, "袈"), (0xB351, "被"), (0xB352, "袒"), (0xB353, "袖"),
    (0xB354, "袍"), (0xB355, "袋"), (0xB356, "覓"), (0xB357, "規"), (0xB358, "訪"), (0xB359, "訝"), (0xB35A, "訣"), (0xB35B, "訥"),
    (0xB35C, "許"), (0xB35D, "設"), (0xB35E, "訟"), (0xB35F, "訛"), (0xB360, "訢"), (0xB361, "豉"), (0xB362, "豚"), (0xB363, "販"),
    (0xB364, "責"), (0xB365, "貫"), (0xB366, "貨"), (0xB367, "貪"), (0xB368, "貧"), (0xB369, "赧"), (0xB36A, "赦"), (0xB36B, "趾"),
    (0xB36C, "趺"), (0xB36D, "軛"), (0xB36E, "軟"), (0xB36F, "這"), (0xB370, "逍"), (0xB371, "通"), (0xB372, "逗"), (0xB373, "連"),
    (0xB374, "速"), (0xB375, "逝"), (0xB376, "逐"), (0xB377, "逕"), (0xB378, "逞"), (0xB379, "造"), (0xB37A, "透"), (0xB37B, "逢"),
    (0xB37C, "逖"), (0xB37D, "逛"), (0xB37E, "途"), (0xB3A1, "部"), (0xB3A2, "郭"), (0xB3A3, "都"), (0xB3A4, "酗"), (0xB3A5, "野"),
    (0xB3A6, "釵"), (0xB3A7, "釦"), (0xB3A8, "釣"), (0xB3A9, "釧"), (0xB3AA, "釭"), (0xB3AB, "釩"), (0xB3AC, "閉"), (0xB3AD, "陪"),
    (0xB3AE, "陵"), (0xB3AF, "陳"), (0xB3B0, "陸"), (0xB3B1, "陰"), (0xB3B2, "陴"), (0xB3B3, "陶"), (0xB3B4, "陷"), (0xB3B5, "陬"),
    (0xB3B6, "雀"), (0xB3B7, "雪"), (0xB3B8, "雩"), (0xB3B9, "章"), (0xB3BA, "竟"), (0xB3BB, "頂"), (0xB3BC, "頃"), (0xB3BD, "魚"),
    (0xB3BE, "鳥"), (0xB3BF, "鹵"), (0xB3C0, "鹿"), (0xB3C1, "麥"), (0xB3C2, "麻"), (0xB3C3, "傢"), (0xB3C4, "傍"), (0xB3C5, "傅"),
    (0xB3C6, "備"), (0xB3C7, "傑"), (0xB3C8, "傀"), (0xB3C9, "傖"), (0xB3CA, "傘"), (0xB3CB, "傚"), (0xB3CC, "最"), (0xB3CD, "凱"),
    (0xB3CE, "割"), (0xB3CF, "剴"), (0xB3D0, "創"), (0xB3D1, "剩"), (0xB3D2, "勞"), (0xB3D3, "勝"), (0xB3D4, "勛"), (0xB3D5, "博"),
    (0xB3D6, "厥"), (0xB3D7, "啻"), (0xB3D8, "喀"), (0xB3D9, "喧"), (0xB3DA, "啼"), (0xB3DB, "喊"), (0xB3DC, "喝"), (0xB3DD, "喘"),
    (0xB3DE, "喂"), (0xB3DF, "喜"), (0xB3E0, "喪"), (0xB3E1, "喔"), (0xB3E2, "喇"), (0xB3E3, "喋"), (0xB3E4, "喃"), (0xB3E5, "喳"),
    (0xB3E6, "單"), (0xB3E7, "喟"), (0xB3E8, "唾"), (0xB3E9, "喲"), (0xB3EA, "喚"), (0xB3EB, "喻"), (0xB3EC, "喬"), (0xB3ED, "喱"),
    (0xB3EE, "啾"), (0xB3EF, "喉"), (0xB3F0, "喫"), (0xB3F1, "喙"), (0xB3F2, "圍"), (0xB3F3, "堯"), (0xB3F4, "堪"), (0xB3F5, "場"),
    (0xB3F6, "堤"), (0xB3F7, "堰"), (0xB3F8, "報"), (0xB3F9, "堡"), (0xB3FA, "堝"), (0xB3FB, "堠"), (0xB3FC, "壹"), (0xB3FD, "壺"),
    (0xB3FE, "奠"), (0xB440, "婷"), (0xB441, "媚"), (0xB442, "婿"), (0xB443, "媒"), (0xB444, "媛"), (0xB445, "媧"), (0xB446, "孳"),
    (0xB447, "孱"), (0xB448, "寒"), (0xB449, "富"), (0xB44A, "寓"), (0xB44B, "寐"), (0xB44C, "尊"), (0xB44D, "尋"), (0xB44E, "就"),
    (0xB44F, "嵌"), (0xB450, "嵐"), (0xB451, "崴"), (0xB452, "嵇"), (0xB453, "巽"), (0xB454, "幅"), (0xB455, "帽"), (0xB456, "幀"),
    (0xB457, "幃"), (0xB458, "幾"), (0xB459, "廊"), (0xB45A, "廁"), (0xB45B, "廂"), (0xB45C, "廄"), (0xB45D, "弼"), (0xB45E, "彭"),
    (0xB45F, "復"), (0xB460, "循"), (0xB461, "徨"), (0xB462, "惑"), (0xB463, "惡"), (0xB464, "悲"), (0xB465, "悶"), (0xB466, "惠"),
    (0xB467, "愜"), (0xB468, "愣"), (0xB469, "惺"), (0xB46A, "愕"), (0xB46B, "惰"), (0xB46C, "惻"), (0xB46D, "惴"), (0xB46E, "慨"),
    (0xB46F, "惱"), (0xB470, "愎"), (0xB471, "惶"), (0xB472, "愉"), (0xB473, "愀"), (0xB474, "愒"), (0xB475, "戟"), (0xB476, "扉"),
    (0xB477, "掣"), (0xB478, "掌"), (0xB479, "描"), (0xB47A, "揀"), (0xB47B, "揩"), (0xB47C, "揉"), (0xB47D, "揆"), (0xB47E, "揍"),
    (0xB4A1, "插"), (0xB4A2, "揣"), (0xB4A3, "提"), (0xB4A4, "握"), (0xB4A5, "揖"), (0xB4A6, "揭"), (0xB4A7, "揮"), (0xB4A8, "捶"),
    (0xB4A9, "援"), (0xB4AA, "揪"), (0xB4AB, "換"), (0xB4AC, "摒"), (0xB4AD, "揚"), (0xB4AE, "揹"), (0xB4AF, "敞"), (0xB4B0, "敦"),
    (0xB4B1, "敢"), (0xB4B2, "散"), (0xB4B3, "斑"), (0xB4B4, "斐"), (0xB4B5, "斯"), (0xB4B6, "普"), (0xB4B7, "晰"), (0xB4B8, "晴"),
    (0xB4B9, "晶"), (0xB4BA, "景"), (0xB4BB, "暑"), (0xB4BC, "智"), (0xB4BD, "晾"), (0xB4BE, "晷"), (0xB4BF, "曾"), (0xB4C0, "替"),
    (0xB4C1, "期"), (0xB4C2, "朝"), (0xB4C3, "棺"), (0xB4C4, "棕"), (0xB4C5, "棠"), (0xB4C6, "棘"), (0xB4C7, "棗"), (0xB4C8, "椅"),
    (0xB4C9, "棟"), (0xB4CA, "棵"), (0xB4CB, "森"), (0xB4CC, "棧"), (0xB4CD, "棹"), (0xB4CE, "棒"), (0xB4CF, "棲"), (0xB4D0, "棣"),
    (0xB4D1, "棋"), (0xB4D2, "棍"), (0xB4D3, "植"), (0xB4D4, "椒"), (0xB4D5, "椎"), (0xB4D6, "棉"), (0xB4D7, "棚"), (0xB4D8, "楮"),
    (0xB4D9, "棻"), (0xB4DA, "款"), (0xB4DB, "欺"), (0xB4DC, "欽"), (0xB4DD, "殘"), (0xB4DE, "殖"), (0xB4DF, "殼"), (0xB4E0, "毯"),
    (0xB4E1, "氮"), (0xB4E2, "氯"), (0xB4E3, "氬"), (0xB4E4, "港"), (0xB4E5, "游"), (0xB4E6, "湔"), (0xB4E7, "渡"), (0xB4E8, "渲"),
    (0xB4E9, "湧"), (0xB4EA, "湊"), (0xB4EB, "渠"), (0xB4EC, "渥"), (0xB4ED, "渣"), (0xB4EE, "減"), (0xB4EF, "湛"), (0xB4F0, "湘"),
    (0xB4F1, "渤"), (0xB4F2, "湖"), (0xB4F3, "湮"), (0xB4F4, "渭"), (0xB4F5, "渦"), (0xB4F6, "湯"), (0xB4F7, "渴"), (0xB4F8, "湍"),
    (0xB4F9, "渺"), (0xB4FA, "測"), (0xB4FB, "湃"), (0xB4FC, "渝"), (0xB4FD, "渾"), (0xB4FE, "滋"), (0xB540, "溉"), (0xB541, "渙"),
    (0xB542, "湎"), (0xB543, "湣"), (0xB544, "湄"), (0xB545, "湲"), (0xB546, "湩"), (0xB547, "湟"), (0xB548, "焙"), (0xB549, "焚"),
    (0xB54A, "焦"), (0xB54B, "焰"), (0xB54C, "無"), (0xB54D, "然"), (0xB54E, "煮"), (0xB54F, "焜"), (0xB550, "牌"), (0xB551, "犄"),
    (0xB552, "犀"), (0xB553, "猶"), (0xB554, "猥"), (0xB555, "猴"), (0xB556, "猩"), (0xB557, "琺"), (0xB558, "琪"), (0xB559, "琳"),
    (0xB55A, "琢"), (0xB55B, "琥"), (0xB55C, "琵"), (0xB55D, "琶"), (0xB55E, "琴"), (0xB55F, "琯"), (0xB560, "琛"), (0xB561, "琦"),
    (0xB562, "琨"), (0xB563, "甥"), (0xB564, "甦"), (0xB565, "畫"), (0xB566, "番"), (0xB567, "痢"), (0xB568, "痛"), (0xB569, "痣"),
    (0xB56A, "痙"), (0xB56B, "痘"), (0xB56C, "痞"), (0xB56D, "痠"), (0xB56E, "登"), (0xB56F, "發"), (0xB570, "皖"), (0xB571, "皓"),
    (0xB572, "皴"), (0xB573, "盜"), (0xB574, "睏"), (0xB575, "短"), (0xB576, "硝"), (0xB577, "硬"), (0xB578, "硯"), (0xB579, "稍"),
    (0xB57A, "稈"), (0xB57B, "程"), (0xB57C, "稅"), (0xB57D, "稀"), (0xB57E, "窘"), (0xB5A1, "窗"), (0xB5A2, "窖"), (0xB5A3, "童"),
    (0xB5A4, "竣"), (0xB5A5, "等"), (0xB5A6, "策"), (0xB5A7, "筆"), (0xB5A8, "筐"), (0xB5A9, "筒"), (0xB5AA, "答"), (0xB5AB, "筍"),
    (0xB5AC, "筋"), (0xB5AD, "筏"), (0xB5AE, "筑"), (0xB5AF, "粟"), (0xB5B0, "粥"), (0xB5B1, "絞"), (0xB5B2, "結"), (0xB5B3, "絨"),
    (0xB5B4, "絕"), (0xB5B5, "紫"), (0xB5B6, "絮"), (0xB5B7, "絲"), (0xB5B8, "絡"), (0xB5B9, "給"), (0xB5BA, "絢"), (0xB5BB, "絰"),
    (0xB5BC, "絳"), (0xB5BD, "善"), (0xB5BE, "翔"), (0xB5BF, "翕"), (0xB5C0, "耋"), (0xB5C1, "聒"), (0xB5C2, "肅"), (0xB5C3, "腕"),
    (0xB5C4, "腔"), (0xB5C5, "腋"), (0xB5C6, "腑"), (0xB5C7, "腎"), (0xB5C8, "脹"), (0xB5C9, "腆"), (0xB5CA, "脾"), (0xB5CB, "腌"),
    (0xB5CC, "腓"), (0xB5CD, "腴"), (0xB5CE, "舒"), (0xB5CF, "舜"), (0xB5D0, "菩"), (0xB5D1, "萃"), (0xB5D2, "菸"), (0xB5D3, "萍"),
    (0xB5D4, "菠"), (0xB5D5, "菅"), (0xB5D6, "萋"), (0xB5D7, "菁"), (0xB5D8, "華"), (0xB5D9, "菱"), (0xB5DA, "菴"), (0xB5DB, "著"),
    (0xB5DC, "萊"), (0xB5DD, "菰"), (0xB5DE, "萌"), (0xB5DF, "菌"), (0xB5E0, "菽"), (0xB5E1, "菲"), (0xB5E2, "菊"), (0xB5E3, "萸"),
    (0xB5E4, "萎"), (0xB5E5, "萄"), (0xB5E6, "菜"), (0xB5E7, "萇"), (0xB5E8, "菔"), (0xB5E9, "菟"), (0xB5EA, "虛"), (0xB5EB, "蛟"),
    (0xB5EC, "蛙"), (0xB5ED, "蛭"), (0xB5EE, "蛔"), (0xB5EF, "蛛"), (0xB5F0, "蛤"), (0xB5F1, "蛐"), (0xB5F2, "蛞"), (0xB5F3, "街"),
    (0xB5F4, "裁"), (0xB5F5, "裂"), (0xB5F6, "袱"), (0xB5F7, "覃"), (0xB5F8, "視"), (0xB5F9, "註"), (0xB5FA, "詠"), (0xB5FB, "評"),
    (0xB5FC, "詞"), (0xB5FD, "証"), (0xB5FE, "詁"), (0xB640, "詔"), (0xB641, "詛"), (0xB642, "詐"), (0xB643, "詆"), (0xB644, "訴"),
    (0xB645, "診"), (0xB646, "訶"), (0xB647, "詖"), (0xB648, "象"), (0xB649, "貂"), (0xB64A, "貯"), (0xB64B, "貼"), (0xB64C, "貳"),
    (0xB64D, "貽"), (0xB64E, "賁"), (0xB64F, "費"), (0xB650, "賀"), (0xB651, "貴"), (0xB652, "買"), (0xB653, "貶"), (0xB654, "貿"),
    (0xB655, "貸"), (0xB656, "越"), (0xB657, "超"), (0xB658, "趁"), (0xB659, "跎"), (0xB65A, "距"), (0xB65B, "跋"), (0xB65C, "跚"),
    (0xB65D, "跑"), (0xB65E, "跌"), (0xB65F, "跛"), (0xB660, "跆"), (0xB661, "軻"), (0xB662, "軸"), (0xB663, "軼"), (0xB664, "辜"),
    (0xB665, "逮"), (0xB666, "逵"), (0xB667, "週"), (0xB668, "逸"), (0xB669, "進"), (0xB66A, "逶"), (0xB66B, "鄂"), (0xB66C, "郵"),
    (0xB66D, "鄉"), (0xB66E, "郾"), (0xB66F, "酣"), (0xB670, "酥"), (0xB671, "量"), (0xB672, "鈔"), (0xB673, "鈕"), (0xB674, "鈣"),
    (0xB675, "鈉"), (0xB676, "鈞"), (0xB677, "鈍"), (0xB678, "鈐"), (0xB679, "鈇"), (0xB67A, "鈑"), (0xB67B, "閔"), (0xB67C, "閏"),
    (0xB67D, "開"), (0xB67E, "閑"), (0xB6A1, "間"), (0xB6A2, "閒"), (0xB6A3, "閎"), (0xB6A4, "隊"), (0xB6A5, "階"), (0xB6A6, "隋"),
    (0xB6A7, "陽"), (0xB6A8, "隅"), (0xB6A9, "隆"), (0xB6AA, "隍"), (0xB6AB, "陲"), (0xB6AC, "隄"), (0xB6AD, "雁"), (0xB6AE, "雅"),
    (0xB6AF, "雄"), (0xB6B0, "集"), (0xB6B1, "雇"), (0xB6B2, "雯"), (0xB6B3, "雲"), (0xB6B4, "韌"), (0xB6B5, "項"), (0xB6B6, "順"),
    (0xB6B7, "須"), (0xB6B8, "飧"), (0xB6B9, "飪"), (0xB6BA, "飯"), (0xB6BB, "飩"), (0xB6BC, "飲"), (0xB6BD, "飭"), (0xB6BE, "馮"),
    (0xB6BF, "馭"), (0xB6C0, "黃"), (0xB6C1, "黍"), (0xB6C2, "黑"), (0xB6C3, "亂"), (0xB6C4, "傭"), (0xB6C5, "債"), (0xB6C6, "傲"),
    (0xB6C7, "傳"), (0xB6C8, "僅"), (0xB6C9, "傾"), (0xB6CA, "催"), (0xB6CB, "傷"), (0xB6CC, "傻"), (0xB6CD, "傯"), (0xB6CE, "僇"),
    (0xB6CF, "剿"), (0xB6D0, "剷"), (0xB6D1, "剽"), (0xB6D2, "募"), (0xB6D3, "勦"), (0xB6D4, "勤"), (0xB6D5, "勢"), (0xB6D6, "勣"),
    (0xB6D7, "匯"), (0xB6D8, "嗟"), (0xB6D9, "嗨"), (0xB6DA, "嗓"), (0xB6DB, "嗦"), (0xB6DC, "嗎"), (0xB6DD, "嗜"), (0xB6DE, "嗇"),
    (0xB6DF, "嗑"), (0xB6E0, "嗣"), (0xB6E1, "嗤"), (0xB6E2, "嗯"), (0xB6E3, "嗚"), (0xB6E4, "嗡"), (0xB6E5, "嗅"), (0xB6E6, "嗆"),
    (0xB6E7, "嗥"), (0xB6E8, "嗉"), (0xB6E9, "園"), (0xB6EA, "圓"), (0xB6EB, "塞"), (0xB6EC, "塑"), (0xB6ED, "塘"), (0xB6EE, "塗"),
    (0xB6EF, "塚"), (0xB6F0, "塔"), (0xB6F1, "填"), (0xB6F2, "塌"), (0xB6F3, "塭"), (0xB6F4, "塊"), (0xB6F5, "塢"), (0xB6F6, "塒"),
    (0xB6F7, "塋"), (0xB6F8, "奧"), (0xB6F9, "嫁"), (0xB6FA, "嫉"), (0xB6FB, "嫌"), (0xB6FC, "媾"), (0xB6FD, "媽"), (0xB6FE, "媼"),
    (0xB740, "媳"), (0xB741, "嫂"), (0xB742, "媲"), (0xB743, "嵩"), (0xB744, "嵯"), (0xB745, "幌"), (0xB746, "幹"), (0xB747, "廉"),
    (0xB748, "廈"), (0xB749, "弒"), (0xB74A, "彙"), (0xB74B, "徬"), (0xB74C, "微"), (0xB74D, "愚"), (0xB74E, "意"), (0xB74F, "慈"),
    (0xB750, "感"), (0xB751, "想"), (0xB752, "愛"), (0xB753, "惹"), (0xB754, "愁"), (0xB755, "愈"), (0xB756, "慎"), (0xB757, "慌"),
    (0xB758, "慄"), (0xB759, "慍"), (0xB75A, "愾"), (0xB75B, "愴"), (0xB75C, "愧"), (0xB75D, "愍"), (0xB75E, "愆"), (0xB75F, "愷"),
    (0xB760, "戡"), (0xB761, "戢"), (0xB762, "搓"), (0xB763, "搾"), (0xB764, "搞"), (0xB765, "搪"), (0xB766, "搭"), (0xB767, "搽"),
    (0xB768, "搬"), (0xB769, "搏"), (0xB76A, "搜"), (0xB76B, "搔"), (0xB76C, "損"), (0xB76D, "搶"), (0xB76E, "搖"), (0xB76F, "搗"),
    (0xB770, "搆"), (0xB771, "敬"), (0xB772, "斟"), (0xB773, "新"), (0xB774, "暗"), (0xB775, "暉"), (0xB776, "暇"), (0xB777, "暈"),
    (0xB778, "暖"), (0xB779, "暄"), (0xB77A, "暘"), (0xB77B, "暍"), (0xB77C, "會"), (0xB77D, "榔"), (0xB77E, "業"), (0xB7A1, "楚"),
    (0xB7A2, "楷"), (0xB7A3, "楠"), (0xB7A4, "楔"), (0xB7A5, "極"), (0xB7A6, "椰"), (0xB7A7, "概"), (0xB7A8, "楊"), (0xB7A9, "楨"),
    (0xB7AA, "楫"), (0xB7AB, "楞"), (0xB7AC, "楓"), (0xB7AD, "楹"), (0xB7AE, "榆"), (0xB7AF, "楝"), (0xB7B0, "楣"), (0xB7B1, "楛"),
    (0xB7B2, "歇"), (0xB7B3, "歲"), (0xB7B4, "毀"), (0xB7B5, "殿"), (0xB7B6, "毓"), (0xB7B7, "毽"), (0xB7B8, "溢"), (0xB7B9, "溯"),
    (0xB7BA, "滓"), (0xB7BB, "溶"), (0xB7BC, "滂"), (0xB7BD, "源"), (0xB7BE, "溝"), (0xB7BF, "滇"), (0xB7C0, "滅"), (0xB7C1, "溥"),
    (0xB7C2, "溘"), (0xB7C3, "溼"), (0xB7C4, "溺"), (0xB7C5, "溫"), (0xB7C6, "滑"), (0xB7C7, "準"), (0xB7C8, "溜"), (0xB7C9, "滄"),
    (0xB7CA, "滔"), (0xB7CB, "溪"), (0xB7CC, "溧"), (0xB7CD, "溴"), (0xB7CE, "煎"), (0xB7CF, "煙"), (0xB7D0, "煩"), (0xB7D1, "煤"),
    (0xB7D2, "煉"), (0xB7D3, "照"), (0xB7D4, "煜"), (0xB7D5, "煬"), (0xB7D6, "煦"), (0xB7D7, "煌"), (0xB7D8, "煥"), (0xB7D9, "煞"),
    (0xB7DA, "煆"), (0xB7DB, "煨"), (0xB7DC, "煖"), (0xB7DD, "爺"), (0xB7DE, "牒"), (0xB7DF, "猷"), (0xB7E0, "獅"), (0xB7E1, "猿"),
    (0xB7E2, "猾"), (0xB7E3, "瑯"), (0xB7E4, "瑚"), (0xB7E5, "瑕"), (0xB7E6, "瑟"), (0xB7E7, "瑞"), (0xB7E8, "瑁"), (0xB7E9, "琿"),
    (0xB7EA, "瑙"), (0xB7EB, "瑛"), (0xB7EC, "瑜"), (0xB7ED, "當"), (0xB7EE, "畸"), (0xB7EF, "瘀"), (0xB7F0, "痰"), (0xB7F1, "瘁"),
    (0xB7F2, "痲"), (0xB7F3, "痱"), (0xB7F4, "痺"), (0xB7F5, "痿"), (0xB7F6, "痴"), (0xB7F7, "痳"), (0xB7F8, "盞"), (0xB7F9, "盟"),
    (0xB7FA, "睛"), (0xB7FB, "睫"), (0xB7FC, "睦"), (0xB7FD, "睞"), (0xB7FE, "督"), (0xB840, "睹"), (0xB841, "睪"), (0xB842, "睬"),
    (0xB843, "睜"), (0xB844, "睥"), (0xB845, "睨"), (0xB846, "睢"), (0xB847, "矮"), (0xB848, "碎"), (0xB849, "碰"), (0xB84A, "碗"),
    (0xB84B, "碘"), (0xB84C, "碌"), (0xB84D, "碉"), (0xB84E, "硼"), (0xB84F, "碑"), (0xB850, "碓"), (0xB851, "硿"), (0xB852, "祺"),
    (0xB853, "祿"), (0xB854, "禁"), (0xB855, "萬"), (0xB856, "禽"), (0xB857, "稜"), (0xB858, "稚"), (0xB859, "稠"), (0xB85A, "稔"),
    (0xB85B, "稟"), (0xB85C, "稞"), (0xB85D, "窟"), (0xB85E, "窠"), (0xB85F, "筷"), (0xB860, "節"), (0xB861, "筠"), (0xB862, "筮"),
    (0xB863, "筧"), (0xB864, "粱"), (0xB865, "粳"), (0xB866, "粵"), (0xB867, "經"), (0xB868, "絹"), (0xB869, "綑"), (0xB86A, "綁"),
    (0xB86B, "綏"), (0xB86C, "絛"), (0xB86D, "置"), (0xB86E, "罩"), (0xB86F, "罪"), (0xB870, "署"), (0xB871, "義"), (0xB872, "羨"),
    (0xB873, "群"), (0xB874, "聖"), (0xB875, "聘"), (0xB876, "肆"), (0xB877, "肄"), (0xB878, "腱"), (0xB879, "腰"), (0xB87A, "腸"),
    (0xB87B, "腥"), (0xB87C, "腮"), (0xB87D, "腳"), (0xB87E, "腫"), (0xB8A1, "腹"), (0xB8A2, "腺"), (0xB8A3, "腦"), (0xB8A4, "舅"),
    (0xB8A5, "艇"), (0xB8A6, "蒂"), (0xB8A7, "葷"), (0xB8A8, "落"), (0xB8A9, "萱"), (0xB8AA, "葵"), (0xB8AB, "葦"), (0xB8AC, "葫"),
    (0xB8AD, "葉"), (0xB8AE, "葬"), (0xB8AF, "葛"), (0xB8B0, "萼"), (0xB8B1, "萵"), (0xB8B2, "葡"), (0xB8B3, "董"), (0xB8B4, "葩"),
    (0xB8B5, "葭"), (0xB8B6, "葆"), (0xB8B7, "虞"), (0xB8B8, "虜"), (0xB8B9, "號"), (0xB8BA, "蛹"), (0xB8BB, "蜓"), (0xB8BC, "蜈"),
    (0xB8BD, "蜇"), (0xB8BE, "蜀"), (0xB8BF, "蛾"), (0xB8C0, "蛻"), (0xB8C1, "蜂"), (0xB8C2, "蜃"), (0xB8C3, "蜆"), (0xB8C4, "蜊"),
    (0xB8C5, "衙"), (0xB8C6, "裟"), (0xB8C7, "裔"), (0xB8C8, "裙"), (0xB8C9, "補"), (0xB8CA, "裘"), (0xB8CB, "裝"), (0xB8CC, "裡"),
    (0xB8CD, "裊"), (0xB8CE, "裕"), (0xB8CF, "裒"), (0xB8D0, "覜"), (0xB8D1, "解"), (0xB8D2, "詫"), (0xB8D3, "該"), (0xB8D4, "詳"),
    (0xB8D5, "試"), (0xB8D6, "詩"), (0xB8D7, "詰"), (0xB8D8, "誇"), (0xB8D9, "詼"), (0xB8DA, "詣"), (0xB8DB, "誠"), (0xB8DC, "話"),
    (0xB8DD, "誅"), (0xB8DE, "詭"), (0xB8DF, "詢"), (0xB8E0, "詮"), (0xB8E1, "詬"), (0xB8E2, "詹"), (0xB8E3, "詻"), (0xB8E4, "訾"),
    (0xB8E5, "詨"), (0xB8E6, "豢"), (0xB8E7, "貊"), (0xB8E8, "貉"), (0xB8E9, "賊"), (0xB8EA, "資"), (0xB8EB, "賈"), (0xB8EC, "賄"),
    (0xB8ED, "貲"), (0xB8EE, "賃"), (0xB8EF, "賂"), (0xB8F0, "賅"), (0xB8F1, "跡"), (0xB8F2, "跟"), (0xB8F3, "跨"), (0xB8F4, "路"),
    (0xB8F5, "跳"), (0xB8F6, "跺"), (0xB8F7, "跪"), (0xB8F8, "跤"), (0xB8F9, "跦"), (0xB8FA, "躲"), (0xB8FB, "較"), (0xB8FC, "載"),
    (0xB8FD, "軾"), (0xB8FE, "輊"), (0xB940, "辟"), (0xB941, "農"), (0xB942, "運"), (0xB943, "遊"), (0xB944, "道"), (0xB945, "遂"),
    (0xB946, "達"), (0xB947, "逼"), (0xB948, "違"), (0xB949, "遐"), (0xB94A, "遇"), (0xB94B, "遏"), (0xB94C, "過"), (0xB94D, "遍"),
    (0xB94E, "遑"), (0xB94F, "逾"), (0xB950, "遁"), (0xB951, "鄒"), (0xB952, "鄗"), (0xB953, "酬"), (0xB954, "酪"), (0xB955, "酩"),
    (0xB956, "釉"), (0xB957, "鈷"), (0xB958, "鉗"), (0xB959, "鈸"), (0xB95A, "鈽"), (0xB95B, "鉀"), (0xB95C, "鈾"), (0xB95D, "鉛"),
    (0xB95E, "鉋"), (0xB95F, "鉤"), (0xB960, "鉑"), (0xB961, "鈴"), (0xB962, "鉉"), (0xB963, "鉍"), (0xB964, "鉅"), (0xB965, "鈹"),
    (0xB966, "鈿"), (0xB967, "鉚"), (0xB968, "閘"), (0xB969, "隘"), (0xB96A, "隔"), (0xB96B, "隕"), (0xB96C, "雍"), (0xB96D, "雋"),
    (0xB96E, "雉"), (0xB96F, "雊"), (0xB970, "雷"), (0xB971, "電"), (0xB972, "雹"), (0xB973, "零"), (0xB974, "靖"), (0xB975, "靴"),
    (0xB976, "靶"), (0xB977, "預"), (0xB978, "頑"), (0xB979, "頓"), (0xB97A, "頊"), (0xB97B, "頒"), (0xB97C, "頌"), (0xB97D, "飼"),
    (0xB97E, "飴"), (0xB9A1, "飽"), (0xB9A2, "飾"), (0xB9A3, "馳"), (0xB9A4, "馱"), (0xB9A5, "馴"), (0xB9A6, "髡"), (0xB9A7, "鳩"),
    (0xB9A8, "麂"), (0xB9A9, "鼎"), (0xB9AA, "鼓"), (0xB9AB, "鼠"), (0xB9AC, "僧"), (0xB9AD, "僮"), (0xB9AE, "僥"), (0xB9AF, "僖"),
    (0xB9B0, "僭"), (0xB9B1, "僚"), (0xB9B2, "僕"), (0xB9B3, "像"), (0xB9B4, "僑"), (0xB9B5, "僱"), (0xB9B6, "僎"), (0xB9B7, "僩"),
    (0xB9B8, "兢"), (0xB9B9, "凳"), (0xB9BA, "劃"), (0xB9BB, "劂"), (0xB9BC, "匱"), (0xB9BD, "厭"), (0xB9BE, "嗾"), (0xB9BF, "嘀"),
    (0xB9C0, "嘛"), (0xB9C1, "嘗"), (0xB9C2, "嗽"), (0xB9C3, "嘔"), (0xB9C4, "嘆"), (0xB9C5, "嘉"), (0xB9C6, "嘍"), (0xB9C7, "嘎"),
    (0xB9C8, "嗷"), (0xB9C9, "嘖"), (0xB9CA, "嘟"), (0xB9CB, "嘈"), (0xB9CC, "嘐"), (0xB9CD, "嗶"), (0xB9CE, "團"), (0xB9CF, "圖"),
    (0xB9D0, "塵"), (0xB9D1, "塾"), (0xB9D2, "境"), (0xB9D3, "墓"), (0xB9D4, "墊"), (0xB9D5, "塹"), (0xB9D6, "墅"), (0xB9D7, "塽"),
    (0xB9D8, "壽"), (0xB9D9, "夥"), (0xB9DA, "夢"), (0xB9DB, "夤"), (0xB9DC, "奪"), (0xB9DD, "奩"), (0xB9DE, "嫡"), (0xB9DF, "嫦"),
    (0xB9E0, "嫩"), (0xB9E1, "嫗"), (0xB9E2, "嫖"), (0xB9E3, "嫘"), (0xB9E4, "嫣"), (0xB9E5, "孵"), (0xB9E6, "寞"), (0xB9E7, "寧"),
    (0xB9E8, "寡"), (0xB9E9, "寥"), (0xB9EA, "實"), (0xB9EB, "寨"), (0xB9EC, "寢"), (0xB9ED, "寤"), (0xB9EE, "察"), (0xB9EF, "對"),
    (0xB9F0, "屢"), (0xB9F1, "嶄"), (0xB9F2, "嶇"), (0xB9F3, "幛"), (0xB9F4, "幣"), (0xB9F5, "幕"), (0xB9F6, "幗"), (0xB9F7, "幔"),
    (0xB9F8, "廓"), (0xB9F9, "廖"), (0xB9FA, "弊"), (0xB9FB, "彆"), (0xB9FC, "彰"), (0xB9FD, "徹"), (0xB9FE, "慇"), (0xBA40, "愿"),
    (0xBA41, "態"), (0xBA42, "慷"), (0xBA43, "慢"), (0xBA44, "慣"), (0xBA45, "慟"), (0xBA46, "慚"), (0xBA47, "慘"), (0xBA48, "慵"),
    (0xBA49, "截"), (0xBA4A, "撇"), (0xBA4B, "摘"), (0xBA4C, "摔"), (0xBA4D, "撤"), (0xBA4E, "摸"), (0xBA4F, "摟"), (0xBA50, "摺"),
    (0xBA51, "摑"), (0xBA52, "摧"), (0xBA53, "搴"), (0xBA54, "摭"), (0xBA55, "摻"), (0xBA56, "敲"), (0xBA57, "斡"), (0xBA58, "旗"),
    (0xBA59, "旖"), (0xBA5A, "暢"), (0xBA5B, "暨"), (0xBA5C, "暝"), (0xBA5D, "榜"), (0xBA5E, "榨"), (0xBA5F, "榕"), (0xBA60, "槁"),
    (0xBA61, "榮"), (0xBA62, "槓"), (0xBA63, "構"), (0xBA64, "榛"), (0xBA65, "榷"), (0xBA66, "榻"), (0xBA67, "榫"), (0xBA68, "榴"),
    (0xBA69, "槐"), (0xBA6A, "槍"), (0xBA6B, "榭"), (0xBA6C, "槌"), (0xBA6D, "榦"), (0xBA6E, "槃"), (0xBA6F, "榣"), (0xBA70, "歉"),
    (0xBA71, "歌"), (0xBA72, "氳"), (0xBA73, "漳"), (0xBA74, "演"), (0xBA75, "滾"), (0xBA76, "漓"), (0xBA77, "滴"), (0xBA78, "漩"),
    (0xBA79, "漾"), (0xBA7A, "漠"), (0xBA7B, "漬"), (0xBA7C, "漏"), (0xBA7D, "漂"), (0xBA7E, "漢"), (0xBAA1, "滿"), (0xBAA2, "滯"),
    (0xBAA3, "漆"), (0xBAA4, "漱"), (0xBAA5, "漸"), (0xBAA6, "漲"), (0xBAA7, "漣"), (0xBAA8, "漕"), (0xBAA9, "漫"), (0xBAAA, "漯"),
    (0xBAAB, "澈"), (0xBAAC, "漪"), (0xBAAD, "滬"), (0xBAAE, "漁"), (0xBAAF, "滲"), (0xBAB0, "滌"), (0xBAB1, "滷"), (0xBAB2, "熔"),
    (0xBAB3, "熙"), (0xBAB4, "煽"), (0xBAB5, "熊"), (0xBAB6, "熄"), (0xBAB7, "熒"), (0xBAB8, "爾"), (0xBAB9, "犒"), (0xBABA, "犖"),
    (0xBABB, "獄"), (0xBABC, "獐"), (0xBABD, "瑤"), (0xBABE, "瑣"), (0xBABF, "瑪"), (0xBAC0, "瑰"), (0xBAC1, "瑭"), (0xBAC2, "甄"),
    (0xBAC3, "疑"), (0xBAC4, "瘧"), (0xBAC5, "瘍"), (0xBAC6, "瘋"), (0xBAC7, "瘉"), (0xBAC8, "瘓"), (0xBAC9, "盡"), (0xBACA, "監"),
    (0xBACB, "瞄"), (0xBACC, "睽"), (0xBACD, "睿"), (0xBACE, "睡"), (0xBACF, "磁"), (0xBAD0, "碟"), (0xBAD1, "碧"), (0xBAD2, "碳"),
    (0xBAD3, "碩"), (0xBAD4, "碣"), (0xBAD5, "禎"), (0xBAD6, "福"), (0xBAD7, "禍"), (0xBAD8, "種"), (0xBAD9, "稱"), (0xBADA, "窪"),
    (0xBADB, "窩"), (0xBADC, "竭"), (0xBADD, "端"), (0xBADE, "管"), (0xBADF, "箕"), (0xBAE0, "箋"), (0xBAE1, "筵"), (0xBAE2, "算"),
    (0xBAE3, "箝"), (0xBAE4, "箔"), (0xBAE5, "箏"), (0xBAE6, "箸"), (0xBAE7, "箇"), (0xBAE8, "箄"), (0xBAE9, "粹"), (0xBAEA, "粽"),
    (0xBAEB, "精"), (0xBAEC, "綻"), (0xBAED, "綰"), (0xBAEE, "綜"), (0xBAEF, "綽"), (0xBAF0, "綾"), (0xBAF1, "綠"), (0xBAF2, "緊"),
    (0xBAF3, "綴"), (0xBAF4, "網"), (0xBAF5, "綱"), (0xBAF6, "綺"), (0xBAF7, "綢"), (0xBAF8, "綿"), (0xBAF9, "綵"), (0xBAFA, "綸"),
    (0xBAFB, "維"), (0xBAFC, "緒"), (0xBAFD, "緇"), (0xBAFE, "綬"), (0xBB40, "罰"), (0xBB41, "翠"), (0xBB42, "翡"), (0xBB43, "翟"),
    (0xBB44, "聞"), (0xBB45, "聚"), (0xBB46, "肇"), (0xBB47, "腐"), (0xBB48, "膀"), (0xBB49, "膏"), (0xBB4A, "膈"), (0xBB4B, "膊"),
    (0xBB4C, "腿"), (0xBB4D, "膂"), (0xBB4E, "臧"), (0xBB4F, "臺"), (0xBB50, "與"), (0xBB51, "舔"), (0xBB52, "舞"), (0xBB53, "艋"),
    (0xBB54, "蓉"), (0xBB55, "蒿"), (0xBB56, "蓆"), (0xBB57, "蓄"), (0xBB58, "蒙"), (0xBB59, "蒞"), (0xBB5A, "蒲"), (0xBB5B, "蒜"),
    (0xBB5C, "蓋"), (0xBB5D, "蒸"), (0xBB5E, "蓀"), (0xBB5F, "蓓"), (0xBB60, "蒐"), (0xBB61, "蒼"), (0xBB62, "蓑"), (0xBB63, "蓊"),
    (0xBB64, "蜿"), (0xBB65, "蜜"), (0xBB66, "蜻"), (0xBB67, "蜢"), (0xBB68, "蜥"), (0xBB69, "蜴"), (0xBB6A, "蜘"), (0xBB6B, "蝕"),
    (0xBB6C, "蜷"), (0xBB6D, "蜩"), (0xBB6E, "裳"), (0xBB6F, "褂"), (0xBB70, "裴"), (0xBB71, "裹"), (0xBB72, "裸"), (0xBB73, "製"),
    (0xBB74, "裨"), (0xBB75, "褚"), (0xBB76, "裯"), (0xBB77, "誦"), (0xBB78, "誌"), (0xBB79, "語"), (0xBB7A, "誣"), (0xBB7B, "認"),
    (0xBB7C, "誡"), (0xBB7D, "誓"), (0xBB7E, "誤"), (0xBBA1, "說"), (0xBBA2, "誥"), (0xBBA3, "誨"), (0xBBA4, "誘"), (0xBBA5, "誑"),
    (0xBBA6, "誚"), (0xBBA7, "誧"), (0xBBA8, "豪"), (0xBBA9, "貍"), (0xBBAA, "貌"), (0xBBAB, "賓"), (0xBBAC, "賑"), (0xBBAD, "賒"),
    (0xBBAE, "赫"), (0xBBAF, "趙"), (0xBBB0, "趕"), (0xBBB1, "跼"), (0xBBB2, "輔"), (0xBBB3, "輒"), (0xBBB4, "輕"), (0xBBB5, "輓"),
    (0xBBB6, "辣"), (0xBBB7, "遠"), (0xBBB8, "遘"), (0xBBB9, "遜"), (0xBBBA, "遣"), (0xBBBB, "遙"), (0xBBBC, "遞"), (0xBBBD, "遢"),
    (0xBBBE, "遝"), (0xBBBF, "遛"), (0xBBC0, "鄙"), (0xBBC1, "鄘"), (0xBBC2, "鄞"), (0xBBC3, "酵"), (0xBBC4, "酸"), (0xBBC5, "酷"),
    (0xBBC6, "酴"), (0xBBC7, "鉸"), (0xBBC8, "銀"), (0xBBC9, "銅"), (0xBBCA, "銘"), (0xBBCB, "銖"), (0xBBCC, "鉻"), (0xBBCD, "銓"),
    (0xBBCE, "銜"), (0xBBCF, "銨"), (0xBBD0, "鉼"), (0xBBD1, "銑"), (0xBBD2, "閡"), (0xBBD3, "閨"), (0xBBD4, "閩"), (0xBBD5, "閣"),
    (0xBBD6, "閥"), (0xBBD7, "閤"), (0xBBD8, "隙"), (0xBBD9, "障"), (0xBBDA, "際"), (0xBBDB, "雌"), (0xBBDC, "雒"), (0xBBDD, "需"),
    (0xBBDE, "靼"), (0xBBDF, "鞅"), (0xBBE0, "韶"), (0xBBE1, "頗"), (0xBBE2, "領"), (0xBBE3, "颯"), (0xBBE4, "颱"), (0xBBE5, "餃"),
    (0xBBE6, "餅"), (0xBBE7, "餌"), (0xBBE8, "餉"), (0xBBE9, "駁"), (0xBBEA, "骯"), (0xBBEB, "骰"), (0xBBEC, "髦"), (0xBBED, "魁"),
    (0xBBEE, "魂"), (0xBBEF, "鳴"), (0xBBF0, "鳶"), (0xBBF1, "鳳"), (0xBBF2, "麼"), (0xBBF3, "鼻"), (0xBBF4, "齊"), (0xBBF5, "億"),
    (0xBBF6, "儀"), (0xBBF7, "僻"), (0xBBF8, "僵"), (0xBBF9, "價"), (0xBBFA, "儂"), (0xBBFB, "儈"), (0xBBFC, "儉"), (0xBBFD, "儅"),
    (0xBBFE, "凜"), (0xBC40, "劇"), (0xBC41, "劈"), (0xBC42, "劉"), (0xBC43, "劍"), (0xBC44, "劊"), (0xBC45, "勰"), (0xBC46, "厲"),
    (0xBC47, "嘮"), (0xBC48, "嘻"), (0xBC49, "嘹"), (0xBC4A, "嘲"), (0xBC4B, "嘿"), (0xBC4C, "嘴"), (0xBC4D, "嘩"), (0xBC4E, "噓"),
    (0xBC4F, "噎"), (0xBC50, "噗"), (0xBC51, "噴"), (0xBC52, "嘶"), (0xBC53, "嘯"), (0xBC54, "嘰"), (0xBC55, "墀"), (0xBC56, "墟"),
    (0xBC57, "增"), (0xBC58, "墳"), (0xBC59, "墜"), (0xBC5A, "墮"), (0xBC5B, "墩"), (0xBC5C, "墦"), (0xBC5D, "奭"), (0xBC5E, "嬉"),
    (0xBC5F, "嫻"), (0xBC60, "嬋"), (0xBC61, "嫵"), (0xBC62, "嬌"), (0xBC63, "嬈"), (0xBC64, "寮"), (0xBC65, "寬"), (0xBC66, "審"),
    (0xBC67, "寫"), (0xBC68, "層"), (0xBC69, "履"), (0xBC6A, "嶝"), (0xBC6B, "嶔"), (0xBC6C, "幢"), (0xBC6D, "幟"), (0xBC6E, "幡"),
    (0xBC6F, "廢"), (0xBC70, "廚"), (0xBC71, "廟"), (0xBC72, "廝"), (0xBC73, "廣"), (0xBC74, "廠"), (0xBC75, "彈"), (0xBC76, "影"),
    (0xBC77, "德"), (0xBC78, "徵"), (0xBC79, "慶"), (0xBC7A, "慧"), (0xBC7B, "慮"), (0xBC7C, "慝"), (0xBC7D, "慕"), (0xBC7E, "憂"),
    (0xBCA1, "慼"), (0xBCA2, "慰"), (0xBCA3, "慫"), (0xBCA4, "慾"), (0xBCA5, "憧"), (0xBCA6, "憐"), (0xBCA7, "憫"), (0xBCA8, "憎"),
    (0xBCA9, "憬"), (0xBCAA, "憚"), (0xBCAB, "憤"), (0xBCAC, "憔"), (0xBCAD, "憮"), (0xBCAE, "戮"), (0xBCAF, "摩"), (0xBCB0, "摯"),
    (0xBCB1, "摹"), (0xBCB2, "撞"), (0xBCB3, "撲"), (0xBCB4, "撈"), (0xBCB5, "撐"), (0xBCB6, "撰"), (0xBCB7, "撥"), (0xBCB8, "撓"),
    (0xBCB9, "撕"), (0xBCBA, "撩"), (0xBCBB, "撒"), (0xBCBC, "撮"), (0xBCBD, "播"), (0xBCBE, "撫"), (0xBCBF, "撚"), (0xBCC0, "撬"),
    (0xBCC1, "撙"), (0xBCC2, "撢"), (0xBCC3, "撳"), (0xBCC4, "敵"), (0xBCC5, "敷"), (0xBCC6, "數"), (0xBCC7, "暮"), (0xBCC8, "暫"),
    (0xBCC9, "暴"), (0xBCCA, "暱"), (0xBCCB, "樣"), (0xBCCC, "樟"), (0xBCCD, "槨"), (0xBCCE, "樁"), (0xBCCF, "樞"), (0xBCD0, "標"),
    (0xBCD1, "槽"), (0xBCD2, "模"), (0xBCD3, "樓"), (0xBCD4, "樊"), (0xBCD5, "槳"), (0xBCD6, "樂"), (0xBCD7, "樅"), (0xBCD8, "槭"),
    (0xBCD9, "樑"), (0xBCDA, "歐"), (0xBCDB, "歎"), (0xBCDC, "殤"), (0xBCDD, "毅"), (0xBCDE, "毆"), (0xBCDF, "漿"), (0xBCE0, "潼"),
    (0xBCE1, "澄"), (0xBCE2, "潑"), (0xBCE3, "潦"), (0xBCE4, "潔"), (0xBCE5, "澆"), (0xBCE6, "潭"), (0xBCE7, "潛"), (0xBCE8, "潸"),
    (0xBCE9, "潮"), (0xBCEA, "澎"), (0xBCEB, "潺"), (0xBCEC, "潰"), (0xBCED, "潤"), (0xBCEE, "澗"), (0xBCEF, "潘"), (0xBCF0, "滕"),
    (0xBCF1, "潯"), (0xBCF2, "潠"), (0xBCF3, "潟"), (0xBCF4, "熟"), (0xBCF5, "熬"), (0xBCF6, "熱"), (0xBCF7, "熨"), (0xBCF8, "牖"),
    (0xBCF9, "犛"), (0xBCFA, "獎"), (0xBCFB, "獗"), (0xBCFC, "瑩"), (0xBCFD, "璋"), (0xBCFE, "璃"), (0xBD40, "瑾"), (0xBD41, "璀"),
    (0xBD42, "畿"), (0xBD43, "瘠"), (0xBD44, "瘩"), (0xBD45, "瘟"), (0xBD46, "瘤"), (0xBD47, "瘦"), (0xBD48, "瘡"), (0xBD49, "瘢"),
    (0xBD4A, "皚"), (0xBD4B, "皺"), (0xBD4C, "盤"), (0xBD4D, "瞎"), (0xBD4E, "瞇"), (0xBD4F, "瞌"), (0xBD50, "瞑"), (0xBD51, "瞋"),
    (0xBD52, "磋"), (0xBD53, "磅"), (0xBD54, "確"), (0xBD55, "磊"), (0xBD56, "碾"), (0xBD57, "磕"), (0xBD58, "碼"), (0xBD59, "磐"),
    (0xBD5A, "稿"), (0xBD5B, "稼"), (0xBD5C, "穀"), (0xBD5D, "稽"), (0xBD5E, "稷"), (0xBD5F, "稻"), (0xBD60, "窯"), (0xBD61, "窮"),
    (0xBD62, "箭"), (0xBD63, "箱"), (0xBD64, "範"), (0xBD65, "箴"), (0xBD66, "篆"), (0xBD67, "篇"), (0xBD68, "篁"), (0xBD69, "箠"),
    (0xBD6A, "篌"), (0xBD6B, "糊"), (0xBD6C, "締"), (0xBD6D, "練"), (0xBD6E, "緯"), (0xBD6F, "緻"), (0xBD70, "緘"), (0xBD71, "緬"),
    (0xBD72, "緝"), (0xBD73, "編"), (0xBD74, "緣"), (0xBD75, "線"), (0xBD76, "緞"), (0xBD77, "緩"), (0xBD78, "綞"), (0xBD79, "緙"),
    (0xBD7A, "緲"), (0xBD7B, "緹"), (0xBD7C, "罵"), (0xBD7D, "罷"), (0xBD7E, "羯"), (0xBDA1, "翩"), (0xBDA2, "耦"), (0xBDA3, "膛"),
    (0xBDA4, "膜"), (0xBDA5, "膝"), (0xBDA6, "膠"), (0xBDA7, "膚"), (0xBDA8, "膘"), (0xBDA9, "蔗"), (0xBDAA, "蔽"), (0xBDAB, "蔚"),
    (0xBDAC, "蓮"), (0xBDAD, "蔬"), (0xBDAE, "蔭"), (0xBDAF, "蔓"), (0xBDB0, "蔑"), (0xBDB1, "蔣"), (0xBDB2, "蔡"), (0xBDB3, "蔔"),
    (0xBDB4, "蓬"), (0xBDB5, "蔥"), (0xBDB6, "蓿"), (0xBDB7, "蔆"), (0xBDB8, "螂"), (0xBDB9, "蝴"), (0xBDBA, "蝶"), (0xBDBB, "蝠"),
    (0xBDBC, "蝦"), (0xBDBD, "蝸"), (0xBDBE, "蝨"), (0xBDBF, "蝙"), (0xBDC0, "蝗"), (0xBDC1, "蝌"), (0xBDC2, "蝓"), (0xBDC3, "衛"),
    (0xBDC4, "衝"), (0xBDC5, "褐"), (0xBDC6, "複"), (0xBDC7, "褒"), (0xBDC8, "褓"), (0xBDC9, "褕"), (0xBDCA, "褊"), (0xBDCB, "誼"),
    (0xBDCC, "諒"), (0xBDCD, "談"), (0xBDCE, "諄"), (0xBDCF, "誕"), (0xBDD0, "請"), (0xBDD1, "諸"), (0xBDD2, "課"), (0xBDD3, "諉"),
    (0xBDD4, "諂"), (0xBDD5, "調"), (0xBDD6, "誰"), (0xBDD7, "論"), (0xBDD8, "諍"), (0xBDD9, "誶"), (0xBDDA, "誹"), (0xBDDB, "諛"),
    (0xBDDC, "豌"), (0xBDDD, "豎"), (0xBDDE, "豬"), (0xBDDF, "賠"), (0xBDE0, "賞"), (0xBDE1, "賦"), (0xBDE2, "賤"), (0xBDE3, "賬"),
    (0xBDE4, "賭"), (0xBDE5, "賢"), (0xBDE6, "賣"), (0xBDE7, "賜"), (0xBDE8, "質"), (0xBDE9, "賡"), (0xBDEA, "赭"), (0xBDEB, "趟"),
    (0xBDEC, "趣"), (0xBDED, "踫"), (0xBDEE, "踐"), (0xBDEF, "踝"), (0xBDF0, "踢"), (0xBDF1, "踏"), (0xBDF2, "踩"), (0xBDF3, "踟"),
    (0xBDF4, "踡"), (0xBDF5, "踞"), (0xBDF6, "躺"), (0xBDF7, "輝"), (0xBDF8, "輛"), (0xBDF9, "輟"), (0xBDFA, "輩"), (0xBDFB, "輦"),
    (0xBDFC, "輪"), (0xBDFD, "輜"), (0xBDFE, "輞"), (0xBE40, "輥"), (0xBE41, "適"), (0xBE42, "遮"), (0xBE43, "遨"), (0xBE44, "遭"),
    (0xBE45, "遷"), (0xBE46, "鄰"), (0xBE47, "鄭"), (0xBE48, "鄧"), (0xBE49, "鄱"), (0xBE4A, "醇"), (0xBE4B, "醉"), (0xBE4C, "醋"),
    (0xBE4D, "醃"), (0xBE4E, "鋅"), (0xBE4F, "銻"), (0xBE50, "銷"), (0xBE51, "鋪"), (0xBE52, "銬"), (0xBE53, "鋤"), (0xBE54, "鋁"),
    (0xBE55, "銳"), (0xBE56, "銼"), (0xBE57, "鋒"), (0xBE58, "鋇"), (0xBE59, "鋰"), (0xBE5A, "銲"), (0xBE5B, "閭"), (0xBE5C, "閱"),
    (0xBE5D, "霄"), (0xBE5E, "霆"), (0xBE5F, "震"), (0xBE60, "霉"), (0xBE61, "靠"), (0xBE62, "鞍"), (0xBE63, "鞋"), (0xBE64, "鞏"),
    (0xBE65, "頡"), (0xBE66, "頫"), (0xBE67, "頜"), (0xBE68, "颳"), (0xBE69, "養"), (0xBE6A, "餓"), (0xBE6B, "餒"), (0xBE6C, "餘"),
    (0xBE6D, "駝"), (0xBE6E, "駐"), (0xBE6F, "駟"), (0xBE70, "駛"), (0xBE71, "駑"), (0xBE72, "駕"), (0xBE73, "駒"), (0xBE74, "駙"),
    (0xBE75, "骷"), (0xBE76, "髮"), (0xBE77, "髯"), (0xBE78, "鬧"), (0xBE79, "魅"), (0xBE7A, "魄"), (0xBE7B, "魷"), (0xBE7C, "魯"),
    (0xBE7D, "鴆"), (0xBE7E, "鴉"), (0xBEA1, "鴃"), (0xBEA2, "麩"), (0xBEA3, "麾"), (0xBEA4, "黎"), (0xBEA5, "墨"), (0xBEA6, "齒"),
    (0xBEA7, "儒"), (0xBEA8, "儘"), (0xBEA9, "儔"), (0xBEAA, "儐"), (0xBEAB, "儕"), (0xBEAC, "冀"), (0xBEAD, "冪"), (0xBEAE, "凝"),
    (0xBEAF, "劑"), (0xBEB0, "劓"), (0xBEB1, "勳"), (0xBEB2, "噙"), (0xBEB3, "噫"), (0xBEB4, "噹"), (0xBEB5, "噩"), (0xBEB6, "噤"),
    (0xBEB7, "噸"), (0xBEB8, "噪"), (0xBEB9, "器"), (0xBEBA, "噥"), (0xBEBB, "噱"), (0xBEBC, "噯"), (0xBEBD, "噬"), (0xBEBE, "噢"),
    (0xBEBF, "噶"), (0xBEC0, "壁"), (0xBEC1, "墾"), (0xBEC2, "壇"), (0xBEC3, "壅"), (0xBEC4, "奮"), (0xBEC5, "嬝"), (0xBEC6, "嬴"),
    (0xBEC7, "學"), (0xBEC8, "寰"), (0xBEC9, "導"), (0xBECA, "彊"), (0xBECB, "憲"), (0xBECC, "憑"), (0xBECD, "憩"), (0xBECE, "憊"),
    (0xBECF, "懍"), (0xBED0, "憶"), (0xBED1, "憾"), (0xBED2, "懊"), (0xBED3, "懈"), (0xBED4, "戰"), (0xBED5, "擅"), (0xBED6, "擁"),
    (0xBED7, "擋"), (0xBED8, "撻"), (0xBED9, "撼"), (0xBEDA, "據"), (0xBEDB, "擄"), (0xBEDC, "擇"), (0xBEDD, "擂"), (0xBEDE, "操"),
    (0xBEDF, "撿"), (0xBEE0, "擒"), (0xBEE1, "擔"), (0xBEE2, "撾"), (0xBEE3, "整"), (0xBEE4, "曆"), (0xBEE5, "曉"), (0xBEE6, "暹"),
    (0xBEE7, "曄"), (0xBEE8, "曇"), (0xBEE9, "暸"), (0xBEEA, "樽"), (0xBEEB, "樸"), (0xBEEC, "樺"), (0xBEED, "橙"), (0xBEEE, "橫"),
    (0xBEEF, "橘"), (0xBEF0, "樹"), (0xBEF1, "橄"), (0xBEF2, "橢"), (0xBEF3, "橡"), (0xBEF4, "橋"), (0xBEF5, "橇"), (0xBEF6, "樵"),
    (0xBEF7, "機"), (0xBEF8, "橈"), (0xBEF9, "歙"), (0xBEFA, "歷"), (0xBEFB, "氅"), (0xBEFC, "濂"), (0xBEFD, "澱"), (0xBEFE, "澡"),
    (0xBF40, "濃"), (0xBF41, "澤"), (0xBF42, "濁"), (0xBF43, "澧"), (0xBF44, "澳"), (0xBF45, "激"), (0xBF46, "澹"), (0xBF47, "澶"),
    (0xBF48, "澦"), (0xBF49, "澠"), (0xBF4A, "澴"), (0xBF4B, "熾"), (0xBF4C, "燉"), (0xBF4D, "燐"), (0xBF4E, "燒"), (0xBF4F, "燈"),
    (0xBF50, "燕"), (0xBF51, "熹"), (0xBF52, "燎"), (0xBF53, "燙"), (0xBF54, "燜"), (0xBF55, "燃"), (0xBF56, "燄"), (0xBF57, "獨"),
    (0xBF58, "璜"), (0xBF59, "璣"), (0xBF5A, "璘"), (0xBF5B, "璟"), (0xBF5C, "璞"), (0xBF5D, "瓢"), (0xBF5E, "甌"), (0xBF5F, "甍"),
    (0xBF60, "瘴"), (0xBF61, "瘸"), (0xBF62, "瘺"), (0xBF63, "盧"), (0xBF64, "盥"), (0xBF65, "瞠"), (0xBF66, "瞞"), (0xBF67, "瞟"),
    (0xBF68, "瞥"), (0xBF69, "磨"), (0xBF6A, "磚"), (0xBF6B, "磬"), (0xBF6C, "磧"), (0xBF6D, "禦"), (0xBF6E, "積"), (0xBF6F, "穎"),
    (0xBF70, "穆"), (0xBF71, "穌"), (0xBF72, "穋"), (0xBF73, "窺"), (0xBF74, "篙"), (0xBF75, "簑"), (0xBF76, "築"), (0xBF77, "篤"),
    (0xBF78, "篛"), (0xBF79, "篡"), (0xBF7A, "篩"), (0xBF7B, "篦"), (0xBF7C, "糕"), (0xBF7D, "糖"), (0xBF7E, "縊"), (0xBFA1, "縑"),
    (0xBFA2, "縈"), (0xBFA3, "縛"), (0xBFA4, "縣"), (0xBFA5, "縞"), (0xBFA6, "縝"), (0xBFA7, "縉"), (0xBFA8, "縐"), (0xBFA9, "罹"),
    (0xBFAA, "羲"), (0xBFAB, "翰"), (0xBFAC, "翱"), (0xBFAD, "翮"), (0xBFAE, "耨"), (0xBFAF, "膳"), (0xBFB0, "膩"), (0xBFB1, "膨"),
    (0xBFB2, "臻"), (0xBFB3, "興"), (0xBFB4, "艘"), (0xBFB5, "艙"), (0xBFB6, "蕊"), (0xBFB7, "蕙"), (0xBFB8, "蕈"), (0xBFB9, "蕨"),
    (0xBFBA, "蕩"), (0xBFBB, "蕃"), (0xBFBC, "蕉"), (0xBFBD, "蕭"), (0xBFBE, "蕪"), (0xBFBF, "蕞"), (0xBFC0, "螃"), (0xBFC1, "螟"),
    (0xBFC2, "螞"), (0xBFC3, "螢"), (0xBFC4, "融"), (0xBFC5, "衡"), (0xBFC6, "褪"), (0xBFC7, "褲"), (0xBFC8, "褥"), (0xBFC9, "褫"),
    (0xBFCA, "褡"), (0xBFCB, "親"), (0xBFCC, "覦"), (0xBFCD, "諦"), (0xBFCE, "諺"), (0xBFCF, "諫"), (0xBFD0, "諱"), (0xBFD1, "謀"),
    (0xBFD2, "諜"), (0xBFD3, "諧"), (0xBFD4, "諮"), (0xBFD5, "諾"), (0xBFD6, "謁"), (0xBFD7, "謂"), (0xBFD8, "諷"), (0xBFD9, "諭"),
    (0xBFDA, "諳"), (0xBFDB, "諶"), (0xBFDC, "諼"), (0xBFDD, "豫"), (0xBFDE, "豭"), (0xBFDF, "貓"), (0xBFE0, "賴"), (0xBFE1, "蹄"),
    (0xBFE2, "踱"), (0xBFE3, "踴"), (0xBFE4, "蹂"), (0xBFE5, "踹"), (0xBFE6, "踵"), (0xBFE7, "輻"), (0xBFE8, "輯"), (0xBFE9, "輸"),
    (0xBFEA, "輳"), (0xBFEB, "辨"), (0xBFEC, "辦"), (0xBFED, "遵"), (0xBFEE, "遴"), (0xBFEF, "選"), (0xBFF0, "遲"), (0xBFF1, "遼"),
    (0xBFF2, "遺"), (0xBFF3, "鄴"), (0xBFF4, "醒"), (0xBFF5, "錠"), (0xBFF6, "錶"), (0xBFF7, "鋸"), (0xBFF8, "錳"), (0xBFF9, "錯"),
    (0xBFFA, "錢"), (0xBFFB, "鋼"), (0xBFFC, "錫"), (0xBFFD, "錄"), (0xBFFE, "錚"), (0xC040, "錐"), (0xC041, "錦"), (0xC042, "錡"),
    (0xC043, "錕"), (0xC044, "錮"), (0xC045, "錙"), (0xC046, "閻"), (0xC047, "隧"), (0xC048, "隨"), (0xC049, "險"), (0xC04A, "雕"),
    (0xC04B, "霎"), (0xC04C, "霑"), (0xC04D, "霖"), (0xC04E, "霍"), (0xC04F, "霓"), (0xC050, "霏"), (0xC051, "靛"), (0xC052, "靜"),
    (0xC053, "靦"), (0xC054, "鞘"), (0xC055, "頰"), (0xC056, "頸"), (0xC057, "頻"), (0xC058, "頷"), (0xC059, "頭"), (0xC05A, "頹"),
    (0xC05B, "頤"), (0xC05C, "餐"), (0xC05D, "館"), (0xC05E, "餞"), (0xC05F, "餛"), (0xC060, "餡"), (0xC061, "餚"), (0xC062, "駭"),
    (0xC063, "駢"), (0xC064, "駱"), (0xC065, "骸"), (0xC066, "骼"), (0xC067, "髻"), (0xC068, "髭"), (0xC069, "鬨"), (0xC06A, "鮑"),
    (0xC06B, "鴕"), (0xC06C, "鴣"), (0xC06D, "鴦"), (0xC06E, "鴨"), (0xC06F, "鴒"), (0xC070, "鴛"), (0xC071, "默"), (0xC072, "黔"),
    (0xC073, "龍"), (0xC074, "龜"), (0xC075, "優"), (0xC076, "償"), (0xC077, "儡"), (0xC078, "儲"), (0xC079, "勵"), (0xC07A, "嚎"),
    (0xC07B, "嚀"), (0xC07C, "嚐"), (0xC07D, "嚅"), (0xC07E, "嚇"), (0xC0A1, "嚏"), (0xC0A2, "壕"), (0xC0A3, "壓"), (0xC0A4, "壑"),
    (0xC0A5, "壎"), (0xC0A6, "嬰"), (0xC0A7, "嬪"), (0xC0A8, "嬤"), (0xC0A9, "孺"), (0xC0AA, "尷"), (0xC0AB, "屨"), (0xC0AC, "嶼"),
    (0xC0AD, "嶺"), (0xC0AE, "嶽"), (0xC0AF, "嶸"), (0xC0B0, "幫"), (0xC0B1, "彌"), (0xC0B2, "徽"), (0xC0B3, "應"), (0xC0B4, "懂"),
    (0xC0B5, "懇"), (0xC0B6, "懦"), (0xC0B7, "懋"), (0xC0B8, "戲"), (0xC0B9, "戴"), (0xC0BA, "擎"), (0xC0BB, "擊"), (0xC0BC, "擘"),
    (0xC0BD, "擠"), (0xC0BE, "擰"), (0xC0BF, "擦"), (0xC0C0, "擬"), (0xC0C1, "擱"), (0xC0C2, "擢"), (0xC0C3, "擭"), (0xC0C4, "斂"),
    (0xC0C5, "斃"), (0xC0C6, "曙"), (0xC0C7, "曖"), (0xC0C8, "檀"), (0xC0C9, "檔"), (0xC0CA, "檄"), (0xC0CB, "檢"), (0xC0CC, "檜"),
    (0xC0CD, "櫛"), (0xC0CE, "檣"), (0xC0CF, "橾"), (0xC0D0, "檗"), (0xC0D1, "檐"), (0xC0D2, "檠"), (0xC0D3, "歜"), (0xC0D4, "殮"),
    (0xC0D5, "毚"), (0xC0D6, "氈"), (0xC0D7, "濘"), (0xC0D8, "濱"), (0xC0D9, "濟"), (0xC0DA, "濠"), (0xC0DB, "濛"), (0xC0DC, "濤"),
    (0xC0DD, "濫"), (0xC0DE, "濯"), (0xC0DF, "澀"), (0xC0E0, "濬"), (0xC0E1, "濡"), (0xC0E2, "濩"), (0xC0E3, "濕"), (0xC0E4, "濮"),
    (0xC0E5, "濰"), (0xC0E6, "燧"), (0xC0E7, "營"), (0xC0E8, "燮"), (0xC0E9, "燦"), (0xC0EA, "燥"), (0xC0EB, "燭"), (0xC0EC, "燬"),
    (0xC0ED, "燴"), (0xC0EE, "燠"), (0xC0EF, "爵"), (0xC0F0, "牆"), (0xC0F1, "獰"), (0xC0F2, "獲"), (0xC0F3, "璩"), (0xC0F4, "環"),
    (0xC0F5, "璦"), (0xC0F6, "璨"), (0xC0F7, "癆"), (0xC0F8, "療"), (0xC0F9, "癌"), (0xC0FA, "盪"), (0xC0FB, "瞳"), (0xC0FC, "瞪"),
    (0xC0FD, "瞰"), (0xC0FE, "瞬"), (0xC140, "瞧"), (0xC141, "瞭"), (0xC142, "矯"), (0xC143, "磷"), (0xC144, "磺"), (0xC145, "磴"),
    (0xC146, "磯"), (0xC147, "礁"), (0xC148, "禧"), (0xC149, "禪"), (0xC14A, "穗"), (0xC14B, "窿"), (0xC14C, "簇"), (0xC14D, "簍"),
    (0xC14E, "篾"), (0xC14F, "篷"), (0xC150, "簌"), (0xC151, "篠"), (0xC152, "糠"), (0xC153, "糜"), (0xC154, "糞"), (0xC155, "糢"),
    (0xC156, "糟"), (0xC157, "糙"), (0xC158, "糝"), (0xC159, "縮"), (0xC15A, "績"), (0xC15B, "繆"), (0xC15C, "縷"), (0xC15D, "縲"),
    (0xC15E, "繃"), (0xC15F, "縫"), (0xC160, "總"), (0xC161, "縱"), (0xC162, "繅"), (0xC163, "繁"), (0xC164, "縴"), (0xC165, "縹"),
    (0xC166, "繈"), (0xC167, "縵"), (0xC168, "縿"), (0xC169, "縯"), (0xC16A, "罄"), (0xC16B, "翳"), (0xC16C, "翼"), (0xC16D, "聱"),
    (0xC16E, "聲"), (0xC16F, "聰"), (0xC170, "聯"), (0xC171, "聳"), (0xC172, "臆"), (0xC173, "臃"), (0xC174, "膺"), (0xC175, "臂"),
    (0xC176, "臀"), (0xC177, "膿"), (0xC178, "膽"), (0xC179, "臉"), (0xC17A, "膾"), (0xC17B, "臨"), (0xC17C, "舉"), (0xC17D, "艱"),
    (0xC17E, "薪"), (0xC1A1, "薄"), (0xC1A2, "蕾"), (0xC1A3, "薜"), (0xC1A4, "薑"), (0xC1A5, "薔"), (0xC1A6, "薯"), (0xC1A7, "薛"),
    (0xC1A8, "薇"), (0xC1A9, "薨"), (0xC1AA, "薊"), (0xC1AB, "虧"), (0xC1AC, "蟀"), (0xC1AD, "蟑"), (0xC1AE, "螳"), (0xC1AF, "蟒"),
    (0xC1B0, "蟆"), (0xC1B1, "螫"), (0xC1B2, "螻"), (0xC1B3, "螺"), (0xC1B4, "蟈"), (0xC1B5, "蟋"), (0xC1B6, "褻"), (0xC1B7, "褶"),
    (0xC1B8, "襄"), (0xC1B9, "褸"), (0xC1BA, "褽"), (0xC1BB, "覬"), (0xC1BC, "謎"), (0xC1BD, "謗"), (0xC1BE, "謙"), (0xC1BF, "講"),
    (0xC1C0, "謊"), (0xC1C1, "謠"), (0xC1C2, "謝"), (0xC1C3, "謄"), (0xC1C4, "謐"), (0xC1C5, "豁"), (0xC1C6, "谿"), (0xC1C7, "豳"),
    (0xC1C8, "賺"), (0xC1C9, "賽"), (0xC1CA, "購"), (0xC1CB, "賸"), (0xC1CC, "賻"), (0xC1CD, "趨"), (0xC1CE, "蹉"), (0xC1CF, "蹋"),
    (0xC1D0, "蹈"), (0xC1D1, "蹊"), (0xC1D2, "轄"), (0xC1D3, "輾"), (0xC1D4, "轂"), (0xC1D5, "轅"), (0xC1D6, "輿"), (0xC1D7, "避"),
    (0xC1D8, "遽"), (0xC1D9, "還"), (0xC1DA, "邁"), (0xC1DB, "邂"), (0xC1DC, "邀"), (0xC1DD, "鄹"), (0xC1DE, "醣"), (0xC1DF, "醞"),
    (0xC1E0, "醜"), (0xC1E1, "鍍"), (0xC1E2, "鎂"), (0xC1E3, "錨"), (0xC1E4, "鍵"), (0xC1E5, "鍊"), (0xC1E6, "鍥"), (0xC1E7, "鍋"),
    (0xC1E8, "錘"), (0xC1E9, "鍾"), (0xC1EA, "鍬"), (0xC1EB, "鍛"), (0xC1EC, "鍰"), (0xC1ED, "鍚"), (0xC1EE, "鍔"), (0xC1EF, "闊"),
    (0xC1F0, "闋"), (0xC1F1, "闌"), (0xC1F2, "闈"), (0xC1F3, "闆"), (0xC1F4, "隱"), (0xC1F5, "隸"), (0xC1F6, "雖"), (0xC1F7, "霜"),
    (0xC1F8, "霞"), (0xC1F9, "鞠"), (0xC1FA, "韓"), (0xC1FB, "顆"), (0xC1FC, "颶"), (0xC1FD, "餵"), (0xC1FE, "騁"), (0xC240, "駿"),
    (0xC241, "鮮"), (0xC242, "鮫"), (0xC243, "鮪"), (0xC244, "鮭"), (0xC245, "鴻"), (0xC246, "鴿"), (0xC247, "麋"), (0xC248, "黏"),
    (0xC249, "點"), (0xC24A, "黜"), (0xC24B, "黝"), (0xC24C, "黛"), (0xC24D, "鼾"), (0xC24E, "齋"), (0xC24F, "叢"), (0xC250, "嚕"),
    (0xC251, "嚮"), (0xC252, "壙"), (0xC253, "壘"), (0xC254, "嬸"), (0xC255, "彝"), (0xC256, "懣"), (0xC257, "戳"), (0xC258, "擴"),
    (0xC259, "擲"), (0xC25A, "擾"), (0xC25B, "攆"), (0xC25C, "擺"), (0xC25D, "擻"), (0xC25E, "擷"), (0xC25F, "斷"), (0xC260, "曜"),
    (0xC261, "朦"), (0xC262, "檳"), (0xC263, "檬"), (0xC264, "櫃"), (0xC265, "檻"), (0xC266, "檸"), (0xC267, "櫂"), (0xC268, "檮"),
    (0xC269, "檯"), (0xC26A, "歟"), (0xC26B, "歸"), (0xC26C, "殯"), (0xC26D, "瀉"), (0xC26E, "瀋"), (0xC26F, "濾"), (0xC270, "瀆"),
    (0xC271, "濺"), (0xC272, "瀑"), (0xC273, "瀏"), (0xC274, "燻"), (0xC275, "燼"), (0xC276, "燾"), (0xC277, "燸"), (0xC278, "獷"),
    (0xC279, "獵"), (0xC27A, "璧"), (0xC27B, "璿"), (0xC27C, "甕"), (0xC27D, "癖"), (0xC27E, "癘"), (0xC2A1, "癒"), (0xC2A2, "瞽"),
    (0xC2A3, "瞿"), (0xC2A4, "瞻"), (0xC2A5, "瞼"), (0xC2A6, "礎"), (0xC2A7, "禮"), (0xC2A8, "穡"), (0xC2A9, "穢"), (0xC2AA, "穠"),
    (0xC2AB, "竄"), (0xC2AC, "竅"), (0xC2AD, "簫"), (0xC2AE, "簧"), (0xC2AF, "簪"), (0xC2B0, "簞"), (0xC2B1, "簣"), (0xC2B2, "簡"),
    (0xC2B3, "糧"), (0xC2B4, "織"), (0xC2B5, "繕"), (0xC2B6, "繞"), (0xC2B7, "繚"), (0xC2B8, "繡"), (0xC2B9, "繒"), (0xC2BA, "繙"),
    (0xC2BB, "罈"), (0xC2BC, "翹"), (0xC2BD, "翻"), (0xC2BE, "職"), (0xC2BF, "聶"), (0xC2C0, "臍"), (0xC2C1, "臏"), (0xC2C2, "舊"),
    (0xC2C3, "藏"), (0xC2C4, "薩"), (0xC2C5, "藍"), (0xC2C6, "藐"), (0xC2C7, "藉"), (0xC2C8, "薰"), (0xC2C9, "薺"), (0xC2CA, "薹"),
    (0xC2CB, "薦"), (0xC2CC, "蟯"), (0xC2CD, "蟬"), (0xC2CE, "蟲"), (0xC2CF, "蟠"), (0xC2D0, "覆"), (0xC2D1, "覲"), (0xC2D2, "觴"),
    (0xC2D3, "謨"), (0xC2D4, "謹"), (0xC2D5, "謬"), (0xC2D6, "謫"), (0xC2D7, "豐"), (0xC2D8, "贅"), (0xC2D9, "蹙"), (0xC2DA, "蹣"),
    (0xC2DB, "蹦"), (0xC2DC, "蹤"), (0xC2DD, "蹟"), (0xC2DE, "蹕"), (0xC2DF, "軀"), (0xC2E0, "轉"), (0xC2E1, "轍"), (0xC2E2, "邇"),
    (0xC2E3, "邃"), (0xC2E4, "邈"), (0xC2E5, "醫"), (0xC2E6, "醬"), (0xC2E7, "釐"), (0xC2E8, "鎔"), (0xC2E9, "鎊"), (0xC2EA, "鎖"),
    (0xC2EB, "鎢"), (0xC2EC, "鎳"), (0xC2ED, "鎮"), (0xC2EE, "鎬"), (0xC2EF, "鎰"), (0xC2F0, "鎘"), (0xC2F1, "鎚"), (0xC2F2, "鎗"),
    (0xC2F3, "闔"), (0xC2F4, "闖"), (0xC2F5, "闐"), (0xC2F6, "闕"), (0xC2F7, "離"), (0xC2F8, "雜"), (0xC2F9, "雙"), (0xC2FA, "雛"),
    (0xC2FB, "雞"), (0xC2FC, "霤"), (0xC2FD, "鞣"), (0xC2FE, "鞦"), (0xC340, "鞭"), (0xC341, "韹"), (0xC342, "額"), (0xC343, "顏"),
    (0xC344, "題"), (0xC345, "顎"), (0xC346, "顓"), (0xC347, "颺"), (0xC348, "餾"), (0xC349, "餿"), (0xC34A, "餽"), (0xC34B, "餮"),
    (0xC34C, "馥"), (0xC34D, "騎"), (0xC34E, "髁"), (0xC34F, "鬃"), (0xC350, "鬆"), (0xC351, "魏"), (0xC352, "魎"), (0xC353, "魍"),
    (0xC354, "鯊"), (0xC355, "鯉"), (0xC356, "鯽"), (0xC357, "鯈"), (0xC358, "鯀"), (0xC359, "鵑"), (0xC35A, "鵝"), (0xC35B, "鵠"),
    (0xC35C, "黠"), (0xC35D, "鼕"), (0xC35E, "鼬"), (0xC35F, "儳"), (0xC360, "嚥"), (0xC361, "壞"), (0xC362, "壟"), (0xC363, "壢"),
    (0xC364, "寵"), (0xC365, "龐"), (0xC366, "廬"), (0xC367, "懲"), (0xC368, "懷"), (0xC369, "懶"), (0xC36A, "懵"), (0xC36B, "攀"),
    (0xC36C, "攏"), (0xC36D, "曠"), (0xC36E, "曝"), (0xC36F, "櫥"), (0xC370, "櫝"), (0xC371, "櫚"), (0xC372, "櫓"), (0xC373, "瀛"),
    (0xC374, "瀟"), (0xC375, "瀨"), (0xC376, "瀚"), (0xC377, "瀝"), (0xC378, "瀕"), (0xC379, "瀘"), (0xC37A, "爆"), (0xC37B, "爍"),
    (0xC37C, "牘"), (0xC37D, "犢"), (0xC37E, "獸"), (0xC3A1, "獺"), (0xC3A2, "璽"), (0xC3A3, "瓊"), (0xC3A4, "瓣"), (0xC3A5, "疇"),
    (0xC3A6, "疆"), (0xC3A7, "癟"), (0xC3A8, "癡"), (0xC3A9, "矇"), (0xC3AA, "礙"), (0xC3AB, "禱"), (0xC3AC, "穫"), (0xC3AD, "穩"),
    (0xC3AE, "簾"), (0xC3AF, "簿"), (0xC3B0, "簸"), (0xC3B1, "簽"), (0xC3B2, "簷"), (0xC3B3, "籀"), (0xC3B4, "繫"), (0xC3B5, "繭"),
    (0xC3B6, "繹"), (0xC3B7, "繩"), (0xC3B8, "繪"), (0xC3B9, "羅"), (0xC3BA, "繳"), (0xC3BB, "羶"), (0xC3BC, "羹"), (0xC3BD, "羸"),
    (0xC3BE, "臘"), (0xC3BF, "藩"), (0xC3C0, "藝"), (0xC3C1, "藪"), (0xC3C2, "藕"), (0xC3C3, "藤"), (0xC3C4, "藥"), (0xC3C5, "藷"),
    (0xC3C6, "蟻"), (0xC3C7, "蠅"), (0xC3C8, "蠍"), (0xC3C9, "蟹"), (0xC3CA, "蟾"), (0xC3CB, "襠"), (0xC3CC, "襟"), (0xC3CD, "襖"),
    (0xC3CE, "襞"), (0xC3CF, "譁"), (0xC3D0, "譜"), (0xC3D1, "識"), (0xC3D2, "證"), (0xC3D3, "譚"), (0xC3D4, "譎"), (0xC3D5, "譏"),
    (0xC3D6, "譆"), (0xC3D7, "譙"), (0xC3D8, "贈"), (0xC3D9, "贊"), (0xC3DA, "蹼"), (0xC3DB, "蹲"), (0xC3DC, "躇"), (0xC3DD, "蹶"),
    (0xC3DE, "蹬"), (0xC3DF, "蹺"), (0xC3E0, "蹴"), (0xC3E1, "轔"), (0xC3E2, "轎"), (0xC3E3, "辭"), (0xC3E4, "邊"), (0xC3E5, "邋"),
    (0xC3E6, "醱"), (0xC3E7, "醮"), (0xC3E8, "鏡"), (0xC3E9, "鏑"), (0xC3EA, "鏟"), (0xC3EB, "鏃"), (0xC3EC, "鏈"), (0xC3ED, "鏜"),
    (0xC3EE, "鏝"), (0xC3EF, "鏖"), (0xC3F0, "鏢"), (0xC3F1, "鏍"), (0xC3F2, "鏘"), (0xC3F3, "鏤"), (0xC3F4, "鏗"), (0xC3F5, "鏨"),
    (0xC3F6, "關"), (0xC3F7, "隴"), (0xC3F8, "難"), (0xC3F9, "霪"), (0xC3FA, "霧"), (0xC3FB, "靡"), (0xC3FC, "韜"), (0xC3FD, "韻"),
    (0xC3FE, "類"), (0xC440, "願"), (0xC441, "顛"), (0xC442, "颼"), (0xC443, "饅"), (0xC444, "饉"), (0xC445, "騖"), (0xC446, "騙"),
    (0xC447, "鬍"), (0xC448, "鯨"), (0xC449, "鯧"), (0xC44A, "鯖"), (0xC44B, "鯛"), (0xC44C, "鶉"), (0xC44D, "鵡"), (0xC44E, "鵲"),
    (0xC44F, "鵪"), (0xC450, "鵬"), (0xC451, "麒"), (0xC452, "麗"), (0xC453, "麓"), (0xC454, "麴"), (0xC455, "勸"), (0xC456, "嚨"),
    (0xC457, "嚷"), (0xC458, "嚶"), (0xC459, "嚴"), (0xC45A, "嚼"), (0xC45B, "壤"), (0xC45C, "孀"), (0xC45D, "孃"), (0xC45E, "孽"),
    (0xC45F, "寶"), (0xC460, "巉"), (0xC461, "懸"), (0xC462, "懺"), (0xC463, "攘"), (0xC464, "攔"), (0xC465, "攙"), (0xC466, "曦"),
    (0xC467, "朧"), (0xC468, "櫬"), (0xC469, "瀾"), (0xC46A, "瀰"), (0xC46B, "瀲"), (0xC46C, "爐"), (0xC46D, "獻"), (0xC46E, "瓏"),
    (0xC46F, "癢"), (0xC470, "癥"), (0xC471, "礦"), (0xC472, "礪"), (0xC473, "礬"), (0xC474, "礫"), (0xC475, "竇"), (0xC476, "競"),
    (0xC477, "籌"), (0xC478, "籃"), (0xC479, "籍"), (0xC47A, "糯"), (0xC47B, "糰"), (0xC47C, "辮"), (0xC47D, "繽"), (0xC47E, "繼"),
    (0xC4A1, "纂"), (0xC4A2, "罌"), (0xC4A3, "耀"), (0xC4A4, "臚"), (0xC4A5, "艦"), (0xC4A6, "藻"), (0xC4A7, "藹"), (0xC4A8, "蘑"),
    (0xC4A9, "藺"), (0xC4AA, "蘆"), (0xC4AB, "蘋"), (0xC4AC, "蘇"), (0xC4AD, "蘊"), (0xC4AE, "蠔"), (0xC4AF, "蠕"), (0xC4B0, "襤"),
    (0xC4B1, "覺"), (0xC4B2, "觸"), (0xC4B3, "議"), (0xC4B4, "譬"), (0xC4B5, "警"), (0xC4B6, "譯"), (0xC4B7, "譟"), (0xC4B8, "譫"),
    (0xC4B9, "贏"), (0xC4BA, "贍"), (0xC4BB, "躉"), (0xC4BC, "躁"), (0xC4BD, "躅"), (0xC4BE, "躂"), (0xC4BF, "醴"), (0xC4C0, "釋"),
    (0xC4C1, "鐘"), (0xC4C2, "鐃"), (0xC4C3, "鏽"), (0xC4C4, "闡"), (0xC4C5, "霰"), (0xC4C6, "飄"), (0xC4C7, "饒"), (0xC4C8, "饑"),
    (0xC4C9, "馨"), (0xC4CA, "騫"), (0xC4CB, "騰"), (0xC4CC, "騷"), (0xC4CD, "騵"), (0xC4CE, "鰓"), (0xC4CF, "鰍"), (0xC4D0, "鹹"),
    (0xC4D1, "麵"), (0xC4D2, "黨"), (0xC4D3, "鼯"), (0xC4D4, "齟"), (0xC4D5, "齣"), (0xC4D6, "齡"), (0xC4D7, "儷"), (0xC4D8, "儸"),
    (0xC4D9, "囁"), (0xC4DA, "囀"), (0xC4DB, "囂"), (0xC4DC, "夔"), (0xC4DD, "屬"), (0xC4DE, "巍"), (0xC4DF, "懼"), (0xC4E0, "懾"),
    (0xC4E1, "攝"), (0xC4E2, "攜"), (0xC4E3, "斕"), (0xC4E4, "曩"), (0xC4E5, "櫻"), (0xC4E6, "欄"), (0xC4E7, "櫺"), (0xC4E8, "殲"),
    (0xC4E9, "灌"), (0xC4EA, "爛"), (0xC4EB, "犧"), (0xC4EC, "瓖"), (0xC4ED, "瓔"), (0xC4EE, "癩"), (0xC4EF, "矓"), (0xC4F0, "籐"),
    (0xC4F1, "纏"), (0xC4F2, "續"), (0xC4F3, "羼"), (0xC4F4, "蘗"), (0xC4F5, "蘭"), (0xC4F6, "蘚"), (0xC4F7, "蠣"), (0xC4F8, "蠢"),
    (0xC4F9, "蠡"), (0xC4FA, "蠟"), (0xC4FB, "襪"), (0xC4FC, "襬"), (0xC4FD, "覽"), (0xC4FE, "譴"), (0xC540, "護"), (0xC541, "譽"),
    (0xC542, "贓"), (0xC543, "躊"), (0xC544, "躍"), (0xC545, "躋"), (0xC546, "轟"), (0xC547, "辯"), (0xC548, "醺"), (0xC549, "鐮"),
    (0xC54A, "鐳"), (0xC54B, "鐵"), (0xC54C, "鐺"), (0xC54D, "鐸"), (0xC54E, "鐲"), (0xC54F, "鐫"), (0xC550, "闢"), (0xC551, "霸"),
    (0xC552, "霹"), (0xC553, "露"), (0xC554, "響"), (0xC555, "顧"), (0xC556, "顥"), (0xC557, "饗"), (0xC558, "驅"), (0xC559, "驃"),
    (0xC55A, "驀"), (0xC55B, "騾"), (0xC55C, "髏"), (0xC55D, "魔"), (0xC55E, "魑"), (0xC55F, "鰭"), (0xC560, "鰥"), (0xC561, "鶯"),
    (0xC562, "鶴"), (0xC563, "鷂"), (0xC564, "鶸"), (0xC565, "麝"), (0xC566, "黯"), (0xC567, "鼙"), (0xC568, "齜"), (0xC569, "齦"),
    (0xC56A, "齧"), (0xC56B, "儼"), (0xC56C, "儻"), (0xC56D, "囈"), (0xC56E, "囊"), (0xC56F, "囉"), (0xC570, "孿"), (0xC571, "巔"),
    (0xC572, "巒"), (0xC573, "彎"), (0xC574, "懿"), (0xC575, "攤"), (0xC576, "權"), (0xC577, "歡"), (0xC578, "灑"), (0xC579, "灘"),
    (0xC57A, "玀"), (0xC57B, "瓤"), (0xC57C, "疊"), (0xC57D, "癮"), (0xC57E, "癬"), (0xC5A1, "禳"), (0xC5A2, "籠"), (0xC5A3, "籟"),
    (0xC5A4, "聾"), (0xC5A5, "聽"), (0xC5A6, "臟"), (0xC5A7, "襲"), (0xC5A8, "襯"), (0xC5A9, "觼"), (0xC5AA, "讀"), (0xC5AB, "贖"),
    (0xC5AC, "贗"), (0xC5AD, "躑"), (0xC5AE, "躓"), (0xC5AF, "轡"), (0xC5B0, "酈"), (0xC5B1, "鑄"), (0xC5B2, "鑑"), (0xC5B3, "鑒"),
    (0xC5B4, "霽"), (0xC5B5, "霾"), (0xC5B6, "韃"), (0xC5B7, "韁"), (0xC5B8, "顫"), (0xC5B9, "饕"), (0xC5BA, "驕"), (0xC5BB, "驍"),
    (0xC5BC, "髒"), (0xC5BD, "鬚"), (0xC5BE, "鱉"), (0xC5BF, "鰱"), (0xC5C0, "鰾"), (0xC5C1, "鰻"), (0xC5C2, "鷓"), (0xC5C3, "鷗"),
    (0xC5C4, "鼴"), (0xC5C5, "齬"), (0xC5C6, "齪"), (0xC5C7, "龔"), (0xC5C8, "囌"), (0xC5C9, "巖"), (0xC5CA, "戀"), (0xC5CB, "攣"),
    (0xC5CC, "攫"), (0xC5CD, "攪"), (0xC5CE, "曬"), (0xC5CF, "欐"), (0xC5D0, "瓚"), (0xC5D1, "竊"), (0xC5D2, "籤"), (0xC5D3, "籣"),
    (0xC5D4, "籥"), (0xC5D5, "纓"), (0xC5D6, "纖"), (0xC5D7, "纔"), (0xC5D8, "臢"), (0xC5D9, "蘸"), (0xC5DA, "蘿"), (0xC5DB, "蠱"),
    (0xC5DC, "變"), (0xC5DD, "邐"), (0xC5DE, "邏"), (0xC5DF, "鑣"), (0xC5E0, "鑠"), (0xC5E1, "鑤"), (0xC5E2, "靨"), (0xC5E3, "顯"),
    (0xC5E4, "饜"), (0xC5E5, "驚"), (0xC5E6, "驛"), (0xC5E7, "驗"), (0xC5E8, "髓"), (0xC5E9, "體"), (0xC5EA, "髑"), (0xC5EB, "鱔"),
    (0xC5EC, "鱗"), (0xC5ED, "鱖"), (0xC5EE, "鷥"), (0xC5EF, "麟"), (0xC5F0, "黴"), (0xC5F1, "囑"), (0xC5F2, "壩"), (0xC5F3, "攬"),
    (0xC5F4, "灞"), (0xC5F5, "癱"), (0xC5F6, "癲"), (0xC5F7, "矗"), (0xC5F8, "罐"), (0xC5F9, "羈"), (0xC5FA, "蠶"), (0xC5FB, "蠹"),
    (0xC5FC, "衢"), (0xC5FD, "讓"), (0xC5FE, "讒"), (0xC640, "讖"), (0xC641, "艷"), (0xC642, "贛"), (0xC643, "釀"), (0xC644, "鑪"),
    (0xC645, "靂"), (0xC646, "靈"), (0xC647, "靄"), (0xC648, "韆"), (0xC649, "顰"), (0xC64A, "驟"), (0xC64B, "鬢"), (0xC64C, "魘"),
    (0xC64D, "鱟"), (0xC64E, "鷹"), (0xC64F, "鷺"), (0xC650, "鹼"), (0xC651, "鹽"), (0xC652, "鼇"), (0xC653, "齷"), (0xC654, "齲"),
    (0xC655, "廳"), (0xC656, "欖"), (0xC657, "灣"), (0xC658, "籬"), (0xC659, "籮"), (0xC65A, "蠻"), (0xC65B, "觀"), (0xC65C, "躡"),
    (0xC65D, "釁"), (0xC65E, "鑲"), (0xC65F, "鑰"), (0xC660, "顱"), (0xC661, "饞"), (0xC662, "髖"), (0xC663, "鬣"), (0xC664, "黌"),
    (0xC665, "灤"), (0xC666, "矚"), (0xC667, "讚"), (0xC668, "鑷"), (0xC669, "韉"), (0xC66A, "驢"), (0xC66B, "驥"), (0xC66C, "纜"),
    (0xC66D, "讜"), (0xC66E, "躪"), (0xC66F, "釅"), (0xC670, "鑽"), (0xC671, "鑾"), (0xC672, "鑼"), (0xC673, "鱷"), (0xC674, "鱸"),
    (0xC675, "黷"), (0xC676, "豔"), (0xC677, "鑿"), (0xC678, "鸚"), (0xC679, "爨"), (0xC67A, "驪"), (0xC67B, "鬱"), (0xC67C, "鸛"),
    (0xC67D, "鸞"), (0xC67E, "籲"), (0xC6A1, "ヾ"), (0xC6A2, "ゝ"), (0xC6A3, "ゞ"), (0xC6A4, "々"), (0xC6A5, "ぁ"), (0xC6A6, "あ"),
    (0xC6A7, "ぃ"), (0xC6A8, "い"), (0xC6A9, "ぅ"), (0xC6AA, "う"), (0xC6AB, "ぇ"), (0xC6AC, "え"), (0xC6AD, "ぉ"), (0xC6AE, "お"),
    (0xC6AF, "か"), (0xC6B0, "が"), (0xC6B1, "き"), (0xC6B2, "ぎ"), (0xC6B3, "く"), (0xC6B4, "ぐ"), (0xC6B5, "け"), (0xC6B6, "げ"),
    (0xC6B7, "こ"), (0xC6B8, "ご"), (0xC6B9, "さ"), (0xC6BA, "ざ"), (0xC6BB, "し"), (0xC6BC, "じ"), (0xC6BD, "す"), (0xC6BE, "ず"),
    (0xC6BF, "せ"), (0xC6C0, "ぜ"), (0xC6C1, "そ"), (0xC6C2, "ぞ"), (0xC6C3, "た"), (0xC6C4, "だ"), (0xC6C5, "ち"), (0xC6C6, "ぢ"),
    (0xC6C7, "っ"), (0xC6C8, "つ"), (0xC6C9, "づ"), (0xC6CA, "て"), (0xC6CB, "で"), (0xC6CC, "と"), (0xC6CD, "ど"), (0xC6CE, "な"),
    (0xC6CF, "に"), (0xC6D0, "ぬ"), (0xC6D1, "ね"), (0xC6D2, "の"), (0xC6D3, "は"), (0xC6D4, "ば"), (0xC6D5, "ぱ"), (0xC6D6, "ひ"),
    (0xC6D7, "び"), (0xC6D8, "ぴ"), (0xC6D9, "ふ"), (0xC6DA, "ぶ"), (0xC6DB, "ぷ"), (0xC6DC, "へ"), (0xC6DD, "べ"), (0xC6DE, "ぺ"),
    (0xC6DF, "ほ"), (0xC6E0, "ぼ"), (0xC6E1, "ぽ"), (0xC6E2, "ま"), (0xC6E3, "み"), (0xC6E4, "む"), (0xC6E5, "め"), (0xC6E6, "も"),
    (0xC6E7, "ゃ"), (0xC6E8, "や"), (0xC6E9, "ゅ"), (0xC6EA, "ゆ"), (0xC6EB, "ょ"), (0xC6EC, "よ"), (0xC6ED, "ら"), (0xC6EE, "り"),
    (0xC6EF, "る"), (0xC6F0, "れ"), (0xC6F1, "ろ"), (0xC6F2, "ゎ"), (0xC6F3, "わ"), (0xC6F4, "ゐ"), (0xC6F5, "ゑ"), (0xC6F6, "を"),
    (0xC6F7, "ん"), (0xC6F8, "ァ"), (0xC6F9, "ア"), (0xC6FA, "ィ"), (0xC6FB, "イ"), (0xC6FC, "ゥ"), (0xC6FD, "ウ"), (0xC6FE, "ェ"),
    (0xC740, "エ"), (0xC741, "ォ"), (0xC742, "オ"), (0xC743, "カ"), (0xC744, "ガ"), (0xC745, "キ"), (0xC746, "ギ"), (0xC747, "ク"),
    (0xC748, "グ"), (0xC749, "ケ"), (0xC74A, "ゲ"), (0xC74B, "コ"), (0xC74C, "ゴ"), (0xC74D, "サ"), (0xC74E, "ザ"), (0xC74F, "シ"),
    (0xC750, "ジ"), (0xC751, "ス"), (0xC752, "ズ"), (0xC753, "セ"), (0xC754, "ゼ"), (0xC755, "ソ"), (0xC756, "ゾ"), (0xC757, "タ"),
    (0xC758, "ダ"), (0xC759, "チ"), (0xC75A, "ヂ"), (0xC75B, "ッ"), (0xC75C, "ツ"), (0xC75D, "ヅ"), (0xC75E, "テ"), (0xC75F, "デ"),
    (0xC760, "ト"), (0xC761, "ド"), (0xC762, "ナ"), (0xC763, "ニ"), (0xC764, "ヌ"), (0xC765, "ネ"), (0xC766, "ノ"), (0xC767, "ハ"),
    (0xC768, "バ"), (0xC769, "パ"), (0xC76A, "ヒ"), (0xC76B, "ビ"), (0xC76C, "ピ"), (0xC76D, "フ"), (0xC76E, "ブ"), (0xC76F, "プ"),
    (0xC770, "ヘ"), (0xC771, "ベ"), (0xC772, "ペ"), (0xC773, "ホ"), (0xC774, "ボ"), (0xC775, "ポ"), (0xC776, "マ"), (0xC777, "ミ"),
    (0xC778, "ム"), (0xC779, "メ"), (0xC77A, "モ"), (0xC77B, "ャ"), (0xC77C, "ヤ"), (0xC77D, "ュ"), (0xC77E, "ユ"), (0xC7A1, "ョ"),
    (0xC7A2, "ヨ"), (0xC7A3, "ラ"), (0xC7A4, "リ"), (0xC7A5, "ル"), (0xC7A6, "レ"), (0xC7A7, "ロ"), (0xC7A8, "ヮ"), (0xC7A9, "ワ"),
    (0xC7AA, "ヰ"), (0xC7AB, "ヱ"), (0xC7AC, "ヲ"), (0xC7AD, "ン"), (0xC7AE, "ヴ"), (0xC7AF, "ヵ"), (0xC7B0, "ヶ"), (0xC7B1, "Д"),
    (0xC7B2, "Е"), (0xC7B3, "Ё"), (0xC7B4, "Ж"), (0xC7B5, "З"), (0xC7B6, "И"), (0xC7B7, "Й"), (0xC7B8, "К"), (0xC7B9, "Л"),
    (0xC7BA, "М"), (0xC7BB, "У"), (0xC7BC, "Ф"), (0xC7BD, "Х"), (0xC7BE, "Ц"), (0xC7BF, "Ч"), (0xC7C0, "Ш"), (0xC7C1, "Щ"),
    (0xC7C2, "Ъ"), (0xC7C3, "Ы"), (0xC7C4, "Ь"), (0xC7C5, "Э"), (0xC7C6, "Ю"), (0xC7C7, "Я"), (0xC7C8, "а"), (0xC7C9, "б"),
    (0xC7CA, "в"), (0xC7CB, "г"), (0xC7CC, "д"), (0xC7CD, "е"), (0xC7CE, "ё"), (0xC7CF, "ж"), (0xC7D0, "з"), (0xC7D1, "и"),
    (0xC7D2, "й"), (0xC7D3, "к"), (0xC7D4, "л"), (0xC7D5, "м"), (0xC7D6, "н"), (0xC7D7, "о"), (0xC7D8, "п"), (0xC7D9, "р"),
    (0xC7DA, "с"), (0xC7DB, "т"), (0xC7DC, "у"), (0xC7DD, "ф"), (0xC7DE, "х"), (0xC7DF, "ц"), (0xC7E0, "ч"), (0xC7E1, "ш"),
    (0xC7E2, "щ"), (0xC7E3, "ъ"), (0xC7E4, "ы"), (0xC7E5, "ь"), (0xC7E6, "э"), (0xC7E7, "ю"), (0xC7E8, "я"), (0xC7E9, "①"),
    (0xC7EA, "②"), (0xC7EB, "③"), (0xC7EC, "④"), (0xC7ED, "⑤"), (0xC7EE, "⑥"), (0xC7EF, "⑦"), (0xC7F0, "⑧"), (0xC7F1, "⑨"),
    (0xC7F2, "⑩"), (0xC7F3, "⑴"), (0xC7F4, "⑵"), (0xC7F5, "⑶"), (0xC7F6, "⑷"), (0xC7F7, "⑸"), (0xC7F8, "⑹"), (0xC7F9, "⑺"),
    (0xC7FA, "⑻"), (0xC7FB, "⑼"), (0xC7FC, "⑽"), (0xC940, "乂"), (0xC941, "乜"), (0xC942, "凵"), (0xC943, "匚"), (0xC944, "厂"),
    (0xC945, "万"), (0xC946, "丌"), (0xC947, "乇"), (0xC948, "亍"), (0xC949, "囗"), (0xC94A, "兀"), (0xC94B, "屮"), (0xC94C, "彳"),
    (0xC94D, "丏"), (0xC94E, "冇"), (0xC94F, "与"), (0xC950, "丮"), (0xC951, "亓"), (0xC952, "仂"), (0xC953, "仉"), (0xC954, "仈"),
    (0xC955, "冘"), (0xC956, "勼"), (0xC957, "卬"), (0xC958, "厹"), (0xC959, "圠"), (0xC95A, "夃"), (0xC95B, "夬"), (0xC95C, "尐"),
    (0xC95D, "巿"), (0xC95E, "旡"), (0xC95F, "殳"), (0xC960, "毌"), (0xC961, "气"), (0xC962, "爿"), (0xC963, "丱"), (0xC964, "丼"),
    (0xC965, "仨"), (0xC966, "仜"), (0xC967, "仩"), (0xC968, "仡"), (0xC969, "仝"), (0xC96A, "仚"), (0xC96B, "刌"), (0xC96C, "匜"),
    (0xC96D, "卌"), (0xC96E, "圢"), (0xC96F, "圣"), (0xC970, "夗"), (0xC971, "夯"), (0xC972, "宁"), (0xC973, "宄"), (0xC974, "尒"),
    (0xC975, "尻"), (0xC976, "屴"), (0xC977, "屳"), (0xC978, "帄"), (0xC979, "庀"), (0xC97A, "庂"), (0xC97B, "忉"), (0xC97C, "戉"),
    (0xC97D, "扐"), (0xC97E, "氕"), (0xC9A1, "氶"), (0xC9A2, "汃"), (0xC9A3, "氿"), (0xC9A4, "氻"), (0xC9A5, "犮"), (0xC9A6, "犰"),
    (0xC9A7, "玊"), (0xC9A8, "禸"), (0xC9A9, "肊"), (0xC9AA, "阞"), (0xC9AB, "伎"), (0xC9AC, "优"), (0xC9AD, "伬"), (0xC9AE, "仵"),
    (0xC9AF, "伔"), (0xC9B0, "仱"), (0xC9B1, "伀"), (0xC9B2, "价"), (0xC9B3, "伈"), (0xC9B4, "伝"), (0xC9B5, "伂"), (0xC9B6, "伅"),
    (0xC9B7, "伢"), (0xC9B8, "伓"), (0xC9B9, "伄"), (0xC9BA, "仴"), (0xC9BB, "伒"), (0xC9BC, "冱"), (0xC9BD, "刓"), (0xC9BE, "刉"),
    (0xC9BF, "刐"), (0xC9C0, "劦"), (0xC9C1, "匢"), (0xC9C2, "匟"), (0xC9C3, "卍"), (0xC9C4, "厊"), (0xC9C5, "吇"), (0xC9C6, "囡"),
    (0xC9C7, "囟"), (0xC9C8, "圮"), (0xC9C9, "圪"), (0xC9CA, "圴"), (0xC9CB, "夼"), (0xC9CC, "妀"), (0xC9CD, "奼"), (0xC9CE, "妅"),
    (0xC9CF, "奻"), (0xC9D0, "奾"), (0xC9D1, "奷"), (0xC9D2, "奿"), (0xC9D3, "孖"), (0xC9D4, "尕"), (0xC9D5, "尥"), (0xC9D6, "屼"),
    (0xC9D7, "屺"), (0xC9D8, "屻"), (0xC9D9, "屾"), (0xC9DA, "巟"), (0xC9DB, "幵"), (0xC9DC, "庄"), (0xC9DD, "异"), (0xC9DE, "弚"),
    (0xC9DF, "彴"), (0xC9E0, "忕"), (0xC9E1, "忔"), (0xC9E2, "忏"), (0xC9E3, "扜"), (0xC9E4, "扞"), (0xC9E5, "扤"), (0xC9E6, "扡"),
    (0xC9E7, "扦"), (0xC9E8, "扢"), (0xC9E9, "扙"), (0xC9EA, "扠"), (0xC9EB, "扚"), (0xC9EC, "扥"), (0xC9ED, "旯"), (0xC9EE, "旮"),
    (0xC9EF, "朾"), (0xC9F0, "朹"), (0xC9F1, "朸"), (0xC9F2, "朻"), (0xC9F3, "机"), (0xC9F4, "朿"), (0xC9F5, "朼"), (0xC9F6, "朳"),
    (0xC9F7, "氘"), (0xC9F8, "汆"), (0xC9F9, "汒"), (0xC9FA, "汜"), (0xC9FB, "汏"), (0xC9FC, "汊"), (0xC9FD, "汔"), (0xC9FE, "汋"),
    (0xCA40, "汌"), (0xCA41, "灱"), (0xCA42, "牞"), (0xCA43, "犴"), (0xCA44, "犵"), (0xCA45, "玎"), (0xCA46, "甪"), (0xCA47, "癿"),
    (0xCA48, "穵"), (0xCA49, "网"), (0xCA4A, "艸"), (0xCA4B, "艼"), (0xCA4C, "芀"), (0xCA4D, "艽"), (0xCA4E, "艿"), (0xCA4F, "虍"),
    (0xCA50, "襾"), (0xCA51, "邙"), (0xCA52, "邗"), (0xCA53, "邘"), (0xCA54, "邛"), (0xCA55, "邔"), (0xCA56, "阢"), (0xCA57, "阤"),
    (0xCA58, "阠"), (0xCA59, "阣"), (0xCA5A, "佖"), (0xCA5B, "伻"), (0xCA5C, "佢"), (0xCA5D, "佉"), (0xCA5E, "体"), (0xCA5F, "佤"),
    (0xCA60, "伾"), (0xCA61, "佧"), (0xCA62, "佒"), (0xCA63, "佟"), (0xCA64, "佁"), (0xCA65, "佘"), (0xCA66, "伭"), (0xCA67, "伳"),
    (0xCA68, "伿"), (0xCA69, "佡"), (0xCA6A, "冏"), (0xCA6B, "冹"), (0xCA6C, "刜"), (0xCA6D, "刞"), (0xCA6E, "刡"), (0xCA6F, "劭"),
    (0xCA70, "劮"), (0xCA71, "匉"), (0xCA72, "卣"), (0xCA73, "卲"), (0xCA74, "厎"), (0xCA75, "厏"), (0xCA76, "吰"), (0xCA77, "吷"),
    (0xCA78, "吪"), (0xCA79, "呔"), (0xCA7A, "呅"), (0xCA7B, "吙"), (0xCA7C, "吜"), (0xCA7D, "吥"), (0xCA7E, "吘"), (0xCAA1, "吽"),
    (0xCAA2, "呏"), (0xCAA3, "呁"), (0xCAA4, "吨"), (0xCAA5, "吤"), (0xCAA6, "呇"), (0xCAA7, "囮"), (0xCAA8, "囧"), (0xCAA9, "囥"),
    (0xCAAA, "坁"), (0xCAAB, "坅"), (0xCAAC, "坌"), (0xCAAD, "坉"), (0xCAAE, "坋"), (0xCAAF, "坒"), (0xCAB0, "夆"), (0xCAB1, "奀"),
    (0xCAB2, "妦"), (0xCAB3, "妘"), (0xCAB4, "妠"), (0xCAB5, "妗"), (0xCAB6, "妎"), (0xCAB7, "妢"), (0xCAB8, "妐"), (0xCAB9, "妏"),
    (0xCABA, "妧"), (0xCABB, "妡"), (0xCABC, "宎"), (0xCABD, "宒"), (0xCABE, "尨"), (0xCABF, "尪"), (0xCAC0, "岍"), (0xCAC1, "岏"),
    (0xCAC2, "岈"), (0xCAC3, "岋"), (0xCAC4, "岉"), (0xCAC5, "岒"), (0xCAC6, "岊"), (0xCAC7, "岆"), (0xCAC8, "岓"), (0xCAC9, "岕"),
    (0xCACA, "巠"), (0xCACB, "帊"), (0xCACC, "帎"), (0xCACD, "庋"), (0xCACE, "庉"), (0xCACF, "庌"), (0xCAD0, "庈"), (0xCAD1, "庍"),
    (0xCAD2, "弅"), (0xCAD3, "弝"), (0xCAD4, "彸"), (0xCAD5, "彶"), (0xCAD6, "忒"), (0xCAD7, "忑"), (0xCAD8, "忐"), (0xCAD9, "忭"),
    (0xCADA, "忨"), (0xCADB, "忮"), (0xCADC, "忳"), (0xCADD, "忡"), (0xCADE, "忤"), (0xCADF, "忣"), (0xCAE0, "忺"), (0xCAE1, "忯"),
    (0xCAE2, "忷"), (0xCAE3, "忻"), (0xCAE4, "怀"), (0xCAE5, "忴"), (0xCAE6, "戺"), (0xCAE7, "抃"), (0xCAE8, "抌"), (0xCAE9, "抎"),
    (0xCAEA, "抏"), (0xCAEB, "抔"), (0xCAEC, "抇"), (0xCAED, "扱"), (0xCAEE, "扻"), (0xCAEF, "扺"), (0xCAF0, "扰"), (0xCAF1, "抁"),
    (0xCAF2, "抈"), (0xCAF3, "扷"), (0xCAF4, "扽"), (0xCAF5, "扲"), (0xCAF6, "扴"), (0xCAF7, "攷"), (0xCAF8, "旰"), (0xCAF9, "旴"),
    (0xCAFA, "旳"), (0xCAFB, "旲"), (0xCAFC, "旵"), (0xCAFD, "杅"), (0xCAFE, "杇"), (0xCB40, "杙"), (0xCB41, "杕"), (0xCB42, "杌"),
    (0xCB43, "杈"), (0xCB44, "杝"), (0xCB45, "杍"), (0xCB46, "杚"), (0xCB47, "杋"), (0xCB48, "毐"), (0xCB49, "氙"), (0xCB4A, "氚"),
    (0xCB4B, "汸"), (0xCB4C, "汧"), (0xCB4D, "汫"), (0xCB4E, "沄"), (0xCB4F, "沋"), (0xCB50, "沏"), (0xCB51, "汱"), (0xCB52, "汯"),
    (0xCB53, "汩"), (0xCB54, "沚"), (0xCB55, "汭"), (0xCB56, "沇"), (0xCB57, "沕"), (0xCB58, "沜"), (0xCB59, "汦"), (0xCB5A, "汳"),
    (0xCB5B, "汥"), (0xCB5C, "汻"), (0xCB5D, "沎"), (0xCB5E, "灴"), (0xCB5F, "灺"), (0xCB60, "牣"), (0xCB61, "犿"), (0xCB62, "犽"),
    (0xCB63, "狃"), (0xCB64, "狆"), (0xCB65, "狁"), (0xCB66, "犺"), (0xCB67, "狅"), (0xCB68, "玕"), (0xCB69, "玗"), (0xCB6A, "玓"),
    (0xCB6B, "玔"), (0xCB6C, "玒"), (0xCB6D, "町"), (0xCB6E, "甹"), (0xCB6F, "疔"), (0xCB70, "疕"), (0xCB71, "皁"), (0xCB72, "礽"),
    (0xCB73, "耴"), (0xCB74, "肕"), (0xCB75, "肙"), (0xCB76, "肐"), (0xCB77, "肒"), (0xCB78, "肜"), (0xCB79, "芐"), (0xCB7A, "芏"),
    (0xCB7B, "芅"), (0xCB7C, "芎"), (0xCB7D, "芑"), (0xCB7E, "芓"), (0xCBA1, "芊"), (0xCBA2, "芃"), (0xCBA3, "芄"), (0xCBA4, "豸"),
    (0xCBA5, "迉"), (0xCBA6, "辿"), (0xCBA7, "邟"), (0xCBA8, "邡"), (0xCBA9, "邥"), (0xCBAA, "邞"), (0xCBAB, "邧"), (0xCBAC, "邠"),
    (0xCBAD, "阰"), (0xCBAE, "阨"), (0xCBAF, "阯"), (0xCBB0, "阭"), (0xCBB1, "丳"), (0xCBB2, "侘"), (0xCBB3, "佼"), (0xCBB4, "侅"),
    (0xCBB5, "佽"), (0xCBB6, "侀"), (0xCBB7, "侇"), (0xCBB8, "佶"), (0xCBB9, "佴"), (0xCBBA, "侉"), (0xCBBB, "侄"), (0xCBBC, "佷"),
    (0xCBBD, "佌"), (0xCBBE, "侗"), (0xCBBF, "佪"), (0xCBC0, "侚"), (0xCBC1, "佹"), (0xCBC2, "侁"), (0xCBC3, "佸"), (0xCBC4, "侐"),
    (0xCBC5, "侜"), (0xCBC6, "侔"), (0xCBC7, "侞"), (0xCBC8, "侒"), (0xCBC9, "侂"), (0xCBCA, "侕"), (0xCBCB, "佫"), (0xCBCC, "佮"),
    (0xCBCD, "冞"), (0xCBCE, "冼"), (0xCBCF, "冾"), (0xCBD0, "刵"), (0xCBD1, "刲"), (0xCBD2, "刳"), (0xCBD3, "剆"), (0xCBD4, "刱"),
    (0xCBD5, "劼"), (0xCBD6, "匊"), (0xCBD7, "匋"), (0xCBD8, "匼"), (0xCBD9, "厒"), (0xCBDA, "厔"), (0xCBDB, "咇"), (0xCBDC, "呿"),
    (0xCBDD, "咁"), (0xCBDE, "咑"), (0xCBDF, "咂"), (0xCBE0, "咈"), (0xCBE1, "呫"), (0xCBE2, "呺"), (0xCBE3, "呾"), (0xCBE4, "呥"),
    (0xCBE5, "呬"), (0xCBE6, "呴"), (0xCBE7, "呦"), (0xCBE8, "咍"), (0xCBE9, "呯"), (0xCBEA, "呡"), (0xCBEB, "呠"), (0xCBEC, "咘"),
    (0xCBED, "呣"), (0xCBEE, "呧"), (0xCBEF, "呤"), (0xCBF0, "囷"), (0xCBF1, "囹"), (0xCBF2, "坯"), (0xCBF3, "坲"), (0xCBF4, "坭"),
    (0xCBF5, "坫"), (0xCBF6, "坱"), (0xCBF7, "坰"), (0xCBF8, "坶"), (0xCBF9, "垀"), (0xCBFA, "坵"), (0xCBFB, "坻"), (0xCBFC, "坳"),
    (0xCBFD, "坴"), (0xCBFE, "坢"), (0xCC40, "坨"), (0xCC41, "坽"), (0xCC42, "夌"), (0xCC43, "奅"), (0xCC44, "妵"), (0xCC45, "妺"),
    (0xCC46, "姏"), (0xCC47, "姎"), (0xCC48, "妲"), (0xCC49, "姌"), (0xCC4A, "姁"), (0xCC4B, "妶"), (0xCC4C, "妼"), (0xCC4D, "姃"),
    (0xCC4E, "姖"), (0xCC4F, "妱"), (0xCC50, "妽"), (0xCC51, "姀"), (0xCC52, "姈"), (0xCC53, "妴"), (0xCC54, "姇"), (0xCC55, "孢"),
    (0xCC56, "孥"), (0xCC57, "宓"), (0xCC58, "宕"), (0xCC59, "屄"), (0xCC5A, "屇"), (0xCC5B, "岮"), (0xCC5C, "岤"), (0xCC5D, "岠"),
    (0xCC5E, "岵"), (0xCC5F, "岯"), (0xCC60, "岨"), (0xCC61, "岬"), (0xCC62, "岟"), (0xCC63, "岣"), (0xCC64, "岭"), (0xCC65, "岢"),
    (0xCC66, "岪"), (0xCC67, "岧"), (0xCC68, "岝"), (0xCC69, "岥"), (0xCC6A, "岶"), (0xCC6B, "岰"), (0xCC6C, "岦"), (0xCC6D, "帗"),
    (0xCC6E, "帔"), (0xCC6F, "帙"), (0xCC70, "弨"), (0xCC71, "弢"), (0xCC72, "弣"), (0xCC73, "弤"), (0xCC74, "彔"), (0xCC75, "徂"),
    (0xCC76, "彾"), (0xCC77, "彽"), (0xCC78, "忞"), (0xCC79, "忥"), (0xCC7A, "怭"), (0xCC7B, "怦"), (0xCC7C, "怙"), (0xCC7D, "怲"),
    (0xCC7E, "怋"), (0xCCA1, "怴"), (0xCCA2, "怊"), (0xCCA3, "怗"), (0xCCA4, "怳"), (0xCCA5, "怚"), (0xCCA6, "怞"), (0xCCA7, "怬"),
    (0xCCA8, "怢"), (0xCCA9, "怍"), (0xCCAA, "怐"), (0xCCAB, "怮"), (0xCCAC, "怓"), (0xCCAD, "怑"), (0xCCAE, "怌"), (0xCCAF, "怉"),
    (0xCCB0, "怜"), (0xCCB1, "戔"), (0xCCB2, "戽"), (0xCCB3, "抭"), (0xCCB4, "抴"), (0xCCB5, "拑"), (0xCCB6, "抾"), (0xCCB7, "抪"),
    (0xCCB8, "抶"), (0xCCB9, "拊"), (0xCCBA, "抮"), (0xCCBB, "抳"), (0xCCBC, "抯"), (0xCCBD, "抻"), (0xCCBE, "抩"), (0xCCBF, "抰"),
    (0xCCC0, "抸"), (0xCCC1, "攽"), (0xCCC2, "斨"), (0xCCC3, "斻"), (0xCCC4, "昉"), (0xCCC5, "旼"), (0xCCC6, "昄"), (0xCCC7, "昒"),
    (0xCCC8, "昈"), (0xCCC9, "旻"), (0xCCCA, "昃"), (0xCCCB, "昋"), (0xCCCC, "昍"), (0xCCCD, "昅"), (0xCCCE, "旽"), (0xCCCF, "昑"),
    (0xCCD0, "昐"), (0xCCD1, "曶"), (0xCCD2, "朊"), (0xCCD3, "枅"), (0xCCD4, "杬"), (0xCCD5, "枎"), (0xCCD6, "枒"), (0xCCD7, "杶"),
    (0xCCD8, "杻"), (0xCCD9, "枘"), (0xCCDA, "枆"), (0xCCDB, "构"), (0xCCDC, "杴"), (0xCCDD, "枍"), (0xCCDE, "枌"), (0xCCDF, "杺"),
    (0xCCE0, "枟"), (0xCCE1, "枑"), (0xCCE2, "枙"), (0xCCE3, "枃"), (0xCCE4, "杽"), (0xCCE5, "极"), (0xCCE6, "杸"), (0xCCE7, "杹"),
    (0xCCE8, "枔"), (0xCCE9, "欥"), (0xCCEA, "殀"), (0xCCEB, "歾"), (0xCCEC, "毞"), (0xCCED, "氝"), (0xCCEE, "沓"), (0xCCEF, "泬"),
    (0xCCF0, "泫"), (0xCCF1, "泮"), (0xCCF2, "泙"), (0xCCF3, "沶"), (0xCCF4, "泔"), (0xCCF5, "沭"), (0xCCF6, "泧"), (0xCCF7, "沷"),
    (0xCCF8, "泐"), (0xCCF9, "泂"), (0xCCFA, "沺"), (0xCCFB, "泃"), (0xCCFC, "泆"), (0xCCFD, "泭"), (0xCCFE, "泲"), (0xCD40, "泒"),
    (0xCD41, "泝"), (0xCD42, "沴"), (0xCD43, "沊"), (0xCD44, "沝"), (0xCD45, "沀"), (0xCD46, "泞"), (0xCD47, "泀"), (0xCD48, "洰"),
    (0xCD49, "泍"), (0xCD4A, "泇"), (0xCD4B, "沰"), (0xCD4C, "泹"), (0xCD4D, "泏"), (0xCD4E, "泩"), (0xCD4F, "泑"), (0xCD50, "炔"),
    (0xCD51, "炘"), (0xCD52, "炅"), (0xCD53, "炓"), (0xCD54, "炆"), (0xCD55, "炄"), (0xCD56, "炑"), (0xCD57, "炖"), (0xCD58, "炂"),
    (0xCD59, "炚"), (0xCD5A, "炃"), (0xCD5B, "牪"), (0xCD5C, "狖"), (0xCD5D, "狋"), (0xCD5E, "狘"), (0xCD5F, "狉"), (0xCD60, "狜"),
    (0xCD61, "狒"), (0xCD62, "狔"), (0xCD63, "狚"), (0xCD64, "狌"), (0xCD65, "狑"), (0xCD66, "玤"), (0xCD67, "玡"), (0xCD68, "玭"),
    (0xCD69, "玦"), (0xCD6A, "玢"), (0xCD6B, "玠"), (0xCD6C, "玬"), (0xCD6D, "玝"), (0xCD6E, "瓝"), (0xCD6F, "瓨"), (0xCD70, "甿"),
    (0xCD71, "畀"), (0xCD72, "甾"), (0xCD73, "疌"), (0xCD74, "疘"), (0xCD75, "皯"), (0xCD76, "盳"), (0xCD77, "盱"), (0xCD78, "盰"),
    (0xCD79, "盵"), (0xCD7A, "矸"), (0xCD7B, "矼"), (0xCD7C, "矹"), (0xCD7D, "矻"), (0xCD7E, "矺"), (0xCDA1, "矷"), (0xCDA2, "祂"),
    (0xCDA3, "礿"), (0xCDA4, "秅"), (0xCDA5, "穸"), (0xCDA6, "穻"), (0xCDA7, "竻"), (0xCDA8, "籵"), (0xCDA9, "糽"), (0xCDAA, "耵"),
    (0xCDAB, "肏"), (0xCDAC, "肮"), (0xCDAD, "肣"), (0xCDAE, "肸"), (0xCDAF, "肵"), (0xCDB0, "肭"), (0xCDB1, "舠"), (0xCDB2, "芠"),
    (0xCDB3, "苀"), (0xCDB4, "芫"), (0xCDB5, "芚"), (0xCDB6, "芘"), (0xCDB7, "芛"), (0xCDB8, "芵"), (0xCDB9, "芧"), (0xCDBA, "芮"),
    (0xCDBB, "芼"), (0xCDBC, "芞"), (0xCDBD, "芺"), (0xCDBE, "芴"), (0xCDBF, "芨"), (0xCDC0, "芡"), (0xCDC1, "芩"), (0xCDC2, "苂"),
    (0xCDC3, "芤"), (0xCDC4, "苃"), (0xCDC5, "芶"), (0xCDC6, "芢"), (0xCDC7, "虰"), (0xCDC8, "虯"), (0xCDC9, "虭"), (0xCDCA, "虮"),
    (0xCDCB, "豖"), (0xCDCC, "迒"), (0xCDCD, "迋"), (0xCDCE, "迓"), (0xCDCF, "迍"), (0xCDD0, "迖"), (0xCDD1, "迕"), (0xCDD2, "迗"),
    (0xCDD3, "邲"), (0xCDD4, "邴"), (0xCDD5, "邯"), (0xCDD6, "邳"), (0xCDD7, "邰"), (0xCDD8, "阹"), (0xCDD9, "阽"), (0xCDDA, "阼"),
    (0xCDDB, "阺"), (0xCDDC, "陃"), (0xCDDD, "俍"), (0xCDDE, "俅"), (0xCDDF, "俓"), (0xCDE0, "侲"), (0xCDE1, "俉"), (0xCDE2, "俋"),
    (0xCDE3, "俁"), (0xCDE4, "俔"), (0xCDE5, "俜"), (0xCDE6, "俙"), (0xCDE7, "侻"), (0xCDE8, "侳"), (0xCDE9, "俛"), (0xCDEA, "俇"),
    (0xCDEB, "俖"), (0xCDEC, "侺"), (0xCDED, "俀"), (0xCDEE, "侹"), (0xCDEF, "俬"), (0xCDF0, "剄"), (0xCDF1, "剉"), (0xCDF2, "勀"),
    (0xCDF3, "勂"), (0xCDF4, "匽"), (0xCDF5, "卼"), (0xCDF6, "厗"), (0xCDF7, "厖"), (0xCDF8, "厙"), (0xCDF9, "厘"), (0xCDFA, "咺"),
    (0xCDFB, "咡"), (0xCDFC, "咭"), (0xCDFD, "咥"), (0xCDFE, "哏"), (0xCE40, "哃"), (0xCE41, "茍"), (0xCE42, "咷"), (0xCE43, "咮"),
    (0xCE44, "哖"), (0xCE45, "咶"), (0xCE46, "哅"), (0xCE47, "哆"), (0xCE48, "咠"), (0xCE49, "呰"), (0xCE4A, "咼"), (0xCE4B, "咢"),
    (0xCE4C, "咾"), (0xCE4D, "呲"), (0xCE4E, "哞"), (0xCE4F, "咰"), (0xCE50, "垵"), (0xCE51, "垞"), (0xCE52, "垟"), (0xCE53, "垤"),
    (0xCE54, "垌"), (0xCE55, "垗"), (0xCE56, "垝"), (0xCE57, "垛"), (0xCE58, "垔"), (0xCE59, "垘"), (0xCE5A, "垏"), (0xCE5B, "垙"),
    (0xCE5C, "垥"), (0xCE5D, "垚"), (0xCE5E, "垕"), (0xCE5F, "壴"), (0xCE60, "复"), (0xCE61, "奓"), (0xCE62, "姡"), (0xCE63, "姞"),
    (0xCE64, "姮"), (0xCE65, "娀"), (0xCE66, "姱"), (0xCE67, "姝"), (0xCE68, "姺"), (0xCE69, "姽"), (0xCE6A, "姼"), (0xCE6B, "姶"),
    (0xCE6C, "姤"), (0xCE6D, "姲"), (0xCE6E, "姷"), (0xCE6F, "姛"), (0xCE70, "姩"), (0xCE71, "姳"), (0xCE72, "姵"), (0xCE73, "姠"),
    (0xCE74, "姾"), (0xCE75, "姴"), (0xCE76, "姭"), (0xCE77, "宨"), (0xCE78, "屌"), (0xCE79, "峐"), (0xCE7A, "峘"), (0xCE7B, "峌"),
    (0xCE7C, "峗"), (0xCE7D, "峋"), (0xCE7E, "峛"), (0xCEA1, "峞"), (0xCEA2, "峚"), (0xCEA3, "峉"), (0xCEA4, "峇"), (0xCEA5, "峊"),
    (0xCEA6, "峖"), (0xCEA7, "峓"), (0xCEA8, "峔"), (0xCEA9, "峏"), (0xCEAA, "峈"), (0xCEAB, "峆"), (0xCEAC, "峎"), (0xCEAD, "峟"),
    (0xCEAE, "峸"), (0xCEAF, "巹"), (0xCEB0, "帡"), (0xCEB1, "帢"), (0xCEB2, "帣"), (0xCEB3, "帠"), (0xCEB4, "帤"), (0xCEB5, "庰"),
    (0xCEB6, "庤"), (0xCEB7, "庢"), (0xCEB8, "庛"), (0xCEB9, "庣"), (0xCEBA, "庥"), (0xCEBB, "弇"), (0xCEBC, "弮"), (0xCEBD, "彖"),
    (0xCEBE, "徆"), (0xCEBF, "怷"), (0xCEC0, "怹"), (0xCEC1, "恔"), (0xCEC2, "恲"), (0xCEC3, "恞"), (0xCEC4, "恅"), (0xCEC5, "恓"),
    (0xCEC6, "恇"), (0xCEC7, "恉"), (0xCEC8, "恛"), (0xCEC9, "恌"), (0xCECA, "恀"), (0xCECB, "恂"), (0xCECC, "恟"), (0xCECD, "怤"),
    (0xCECE, "恄"), (0xCECF, "恘"), (0xCED0, "恦"), (0xCED1, "恮"), (0xCED2, "扂"), (0xCED3, "扃"), (0xCED4, "拏"), (0xCED5, "挍"),
    (0xCED6, "挋"), (0xCED7, "拵"), (0xCED8, "挎"), (0xCED9, "挃"), (0xCEDA, "拫"), (0xCEDB, "拹"), (0xCEDC, "挏"), (0xCEDD, "挌"),
    (0xCEDE, "拸"), (0xCEDF, "拶"), (0xCEE0, "挀"), (0xCEE1, "挓"), (0xCEE2, "挔"), (0xCEE3, "拺"), (0xCEE4, "挕"), (0xCEE5, "拻"),
    (0xCEE6, "拰"), (0xCEE7, "敁"), (0xCEE8, "敃"), (0xCEE9, "斪"), (0xCEEA, "斿"), (0xCEEB, "昶"), (0xCEEC, "昡"), (0xCEED, "昲"),
    (0xCEEE, "昵"), (0xCEEF, "昜"), (0xCEF0, "昦"), (0xCEF1, "昢"), (0xCEF2, "昳"), (0xCEF3, "昫"), (0xCEF4, "昺"), (0xCEF5, "昝"),
    (0xCEF6, "昴"), (0xCEF7, "昹"), (0xCEF8, "昮"), (0xCEF9, "朏"), (0xCEFA, "朐"), (0xCEFB, "柁"), (0xCEFC, "柲"), (0xCEFD, "柈"),
    (0xCEFE, "枺"), (0xCF40, "柜"), (0xCF41, "枻"), (0xCF42, "柸"), (0xCF43, "柘"), (0xCF44, "柀"), (0xCF45, "枷"), (0xCF46, "柅"),
    (0xCF47, "柫"), (0xCF48, "柤"), (0xCF49, "柟"), (0xCF4A, "枵"), (0xCF4B, "柍"), (0xCF4C, "枳"), (0xCF4D, "柷"), (0xCF4E, "柶"),
    (0xCF4F, "柮"), (0xCF50, "柣"), (0xCF51, "柂"), (0xCF52, "枹"), (0xCF53, "柎"), (0xCF54, "柧"), (0xCF55, "柰"), (0xCF56, "枲"),
    (0xCF57, "柼"), (0xCF58, "柆"), (0xCF59, "柭"), (0xCF5A, "柌"), (0xCF5B, "枮"), (0xCF5C, "柦"), (0xCF5D, "柛"), (0xCF5E, "柺"),
    (0xCF5F, "柉"), (0xCF60, "柊"), (0xCF61, "柃"), (0xCF62, "柪"), (0xCF63, "柋"), (0xCF64, "欨"), (0xCF65, "殂"), (0xCF66, "殄"),
    (0xCF67, "殶"), (0xCF68, "毖"), (0xCF69, "毘"), (0xCF6A, "毠"), (0xCF6B, "氠"), (0xCF6C, "氡"), (0xCF6D, "洨"), (0xCF6E, "洴"),
    (0xCF6F, "洭"), (0xCF70, "洟"), (0xCF71, "洼"), (0xCF72, "洿"), (0xCF73, "洒"), (0xCF74, "洊"), (0xCF75, "泚"), (0xCF76, "洳"),
    (0xCF77, "洄"), (0xCF78, "洙"), (0xCF79, "洺"), (0xCF7A, "洚"), (0xCF7B, "洑"), (0xCF7C, "洀"), (0xCF7D, "洝"), (0xCF7E, "浂"),
    (0xCFA1, "洁"), (0xCFA2, "洘"), (0xCFA3, "洷"), (0xCFA4, "洃"), (0xCFA5, "洏"), (0xCFA6, "浀"), (0xCFA7, "洇"), (0xCFA8, "洠"),
    (0xCFA9, "洬"), (0xCFAA, "洈"), (0xCFAB, "洢"), (0xCFAC, "洉"), (0xCFAD, "洐"), (0xCFAE, "炷"), (0xCFAF, "炟"), (0xCFB0, "炾"),
    (0xCFB1, "炱"), (0xCFB2, "炰"), (0xCFB3, "炡"), (0xCFB4, "炴"), (0xCFB5, "炵"), (0xCFB6, "炩"), (0xCFB7, "牁"), (0xCFB8, "牉"),
    (0xCFB9, "牊"), (0xCFBA, "牬"), (0xCFBB, "牰"), (0xCFBC, "牳"), (0xCFBD, "牮"), (0xCFBE, "狊"), (0xCFBF, "狤"), (0xCFC0, "狨"),
    (0xCFC1, "狫"), (0xCFC2, "狟"), (0xCFC3, "狪"), (0xCFC4, "狦"), (0xCFC5, "狣"), (0xCFC6, "玅"), (0xCFC7, "珌"), (0xCFC8, "珂"),
    (0xCFC9, "珈"), (0xCFCA, "珅"), (0xCFCB, "玹"), (0xCFCC, "玶"), (0xCFCD, "玵"), (0xCFCE, "玴"), (0xCFCF, "珫"), (0xCFD0, "玿"),
    (0xCFD1, "珇"), (0xCFD2, "玾"), (0xCFD3, "珃"), (0xCFD4, "珆"), (0xCFD5, "玸"), (0xCFD6, "珋"), (0xCFD7, "瓬"), (0xCFD8, "瓮"),
    (0xCFD9, "甮"), (0xCFDA, "畇"), (0xCFDB, "畈"), (0xCFDC, "疧"), (0xCFDD, "疪"), (0xCFDE, "癹"), (0xCFDF, "盄"), (0xCFE0, "眈"),
    (0xCFE1, "眃"), (0xCFE2, "眄"), (0xCFE3, "眅"), (0xCFE4, "眊"), (0xCFE5, "盷"), (0xCFE6, "盻"), (0xCFE7, "盺"), (0xCFE8, "矧"),
    (0xCFE9, "矨"), (0xCFEA, "砆"), (0xCFEB, "砑"), (0xCFEC, "砒"), (0xCFED, "砅"), (0xCFEE, "砐"), (0xCFEF, "砏"), (0xCFF0, "砎"),
    (0xCFF1, "砉"), (0xCFF2, "砃"), (0xCFF3, "砓"), (0xCFF4, "祊"), (0xCFF5, "祌"), (0xCFF6, "祋"), (0xCFF7, "祅"), (0xCFF8, "祄"),
    (0xCFF9, "秕"), (0xCFFA, "种"), (0xCFFB, "秏"), (0xCFFC, "秖"), (0xCFFD, "秎"), (0xCFFE, "窀"), (0xD040, "穾"), (0xD041, "竑"),
    (0xD042, "笀"), (0xD043, "笁"), (0xD044, "籺"), (0xD045, "籸"), (0xD046, "籹"), (0xD047, "籿"), (0xD048, "粀"), (0xD049, "粁"),
    (0xD04A, "紃"), (0xD04B, "紈"), (0xD04C, "紁"), (0xD04D, "罘"), (0xD04E, "羑"), (0xD04F, "羍"), (0xD050, "羾"), (0xD051, "耇"),
    (0xD052, "耎"), (0xD053, "耏"), (0xD054, "耔"), (0xD055, "耷"), (0xD056, "胘"), (0xD057, "胇"), (0xD058, "胠"), (0xD059, "胑"),
    (0xD05A, "胈"), (0xD05B, "胂"), (0xD05C, "胐"), (0xD05D, "胅"), (0xD05E, "胣"), (0xD05F, "胙"), (0xD060, "胜"), (0xD061, "胊"),
    (0xD062, "胕"), (0xD063, "胉"), (0xD064, "胏"), (0xD065, "胗"), (0xD066, "胦"), (0xD067, "胍"), (0xD068, "臿"), (0xD069, "舡"),
    (0xD06A, "芔"), (0xD06B, "苙"), (0xD06C, "苾"), (0xD06D, "苹"), (0xD06E, "茇"), (0xD06F, "苨"), (0xD070, "茀"), (0xD071, "苕"),
    (0xD072, "茺"), (0xD073, "苫"), (0xD074, "苖"), (0xD075, "苴"), (0xD076, "苬"), (0xD077, "苡"), (0xD078, "苲"), (0xD079, "苵"),
    (0xD07A, "茌"), (0xD07B, "苻"), (0xD07C, "苶"), (0xD07D, "苰"), (0xD07E, "苪"), (0xD0A1, "苤"), (0xD0A2, "苠"), (0xD0A3, "苺"),
    (0xD0A4, "苳"), (0xD0A5, "苭"), (0xD0A6, "虷"), (0xD0A7, "虴"), (0xD0A8, "虼"), (0xD0A9, "虳"), (0xD0AA, "衁"), (0xD0AB, "衎"),
    (0xD0AC, "衧"), (0xD0AD, "衪"), (0xD0AE, "衩"), (0xD0AF, "觓"), (0xD0B0, "訄"), (0xD0B1, "訇"), (0xD0B2, "赲"), (0xD0B3, "迣"),
    (0xD0B4, "迡"), (0xD0B5, "迮"), (0xD0B6, "迠"), (0xD0B7, "郱"), (0xD0B8, "邽"), (0xD0B9, "邿"), (0xD0BA, "郕"), (0xD0BB, "郅"),
    (0xD0BC, "邾"), (0xD0BD, "郇"), (0xD0BE, "郋"), (0xD0BF, "郈"), (0xD0C0, "釔"), (0xD0C1, "釓"), (0xD0C2, "陔"), (0xD0C3, "陏"),
    (0xD0C4, "陑"), (0xD0C5, "陓"), (0xD0C6, "陊"), (0xD0C7, "陎"), (0xD0C8, "倞"), (0xD0C9, "倅"), (0xD0CA, "倇"), (0xD0CB, "倓"),
    (0xD0CC, "倢"), (0xD0CD, "倰"), (0xD0CE, "倛"), (0xD0CF, "俵"), (0xD0D0, "俴"), (0xD0D1, "倳"), (0xD0D2, "倷"), (0xD0D3, "倬"),
    (0xD0D4, "俶"), (0xD0D5, "俷"), (0xD0D6, "倗"), (0xD0D7, "倜"), (0xD0D8, "倠"), (0xD0D9, "倧"), (0xD0DA, "倵"), (0xD0DB, "倯"),
    (0xD0DC, "倱"), (0xD0DD, "倎"), (0xD0DE, "党"), (0xD0DF, "冔"), (0xD0E0, "冓"), (0xD0E1, "凊"), (0xD0E2, "凄"), (0xD0E3, "凅"),
    (0xD0E4, "凈"), (0xD0E5, "凎"), (0xD0E6, "剡"), (0xD0E7, "剚"), (0xD0E8, "剒"), (0xD0E9, "剞"), (0xD0EA, "剟"), (0xD0EB, "剕"),
    (0xD0EC, "剢"), (0xD0ED, "勍"), (0xD0EE, "匎"), (0xD0EF, "厞"), (0xD0F0, "唦"), (0xD0F1, "哢"), (0xD0F2, "唗"), (0xD0F3, "唒"),
    (0xD0F4, "哧"), (0xD0F5, "哳"), (0xD0F6, "哤"), (0xD0F7, "唚"), (0xD0F8, "哿"), (0xD0F9, "唄"), (0xD0FA, "唈"), (0xD0FB, "哫"),
    (0xD0FC, "唑"), (0xD0FD, "唅"), (0xD0FE, "哱"), (0xD140, "唊"), (0xD141, "哻"), (0xD142, "哷"), (0xD143, "哸"), (0xD144, "哠"),
    (0xD145, "唎"), (0xD146, "唃"), (0xD147, "唋"), (0xD148, "圁"), (0xD149, "圂"), (0xD14A, "埌"), (0xD14B, "堲"), (0xD14C, "埕"),
    (0xD14D, "埒"), (0xD14E, "垺"), (0xD14F, "埆"), (0xD150, "垽"), (0xD151, "垼"), (0xD152, "垸"), (0xD153, "垶"), (0xD154, "垿"),
    (0xD155, "埇"), (0xD156, "埐"), (0xD157, "垹"), (0xD158, "埁"), (0xD159, "夎"), (0xD15A, "奊"), (0xD15B, "娙"), (0xD15C, "娖"),
    (0xD15D, "娭"), (0xD15E, "娮"), (0xD15F, "娕"), (0xD160, "娏"), (0xD161, "娗"), (0xD162, "娊"), (0xD163, "娞"), (0xD164, "娳"),
    (0xD165, "孬"), (0xD166, "宧"), (0xD167, "宭"), (0xD168, "宬"), (0xD169, "尃"), (0xD16A, "屖"), (0xD16B, "屔"), (0xD16C, "峬"),
    (0xD16D, "峿"), (0xD16E, "峮"), (0xD16F, "峱"), (0xD170, "峷"), (0xD171, "崀"), (0xD172, "峹"), (0xD173, "帩"), (0xD174, "帨"),
    (0xD175, "庨"), (0xD176, "庮"), (0xD177, "庪"), (0xD178, "庬"), (0xD179, "弳"), (0xD17A, "弰"), (0xD17B, "彧"), (0xD17C, "恝"),
    (0xD17D, "恚"), (0xD17E, "恧"), (0xD1A1, "恁"), (0xD1A2, "悢"), (0xD1A3, "悈"), (0xD1A4, "悀"), (0xD1A5, "悒"), (0xD1A6, "悁"),
    (0xD1A7, "悝"), (0xD1A8, "悃"), (0xD1A9, "悕"), (0xD1AA, "悛"), (0xD1AB, "悗"), (0xD1AC, "悇"), (0xD1AD, "悜"), (0xD1AE, "悎"),
    (0xD1AF, "戙"), (0xD1B0, "扆"), (0xD1B1, "拲"), (0xD1B2, "挐"), (0xD1B3, "捖"), (0xD1B4, "挬"), (0xD1B5, "捄"), (0xD1B6, "捅"),
    (0xD1B7, "挶"), (0xD1B8, "捃"), (0xD1B9, "揤"), (0xD1BA, "挹"), (0xD1BB, "捋"), (0xD1BC, "捊"), (0xD1BD, "挼"), (0xD1BE, "挩"),
    (0xD1BF, "捁"), (0xD1C0, "挴"), (0xD1C1, "捘"), (0xD1C2, "捔"), (0xD1C3, "捙"), (0xD1C4, "挭"), (0xD1C5, "捇"), (0xD1C6, "挳"),
    (0xD1C7, "捚"), (0xD1C8, "捑"), (0xD1C9, "挸"), (0xD1CA, "捗"), (0xD1CB, "捀"), (0xD1CC, "捈"), (0xD1CD, "敊"), (0xD1CE, "敆"),
    (0xD1CF, "旆"), (0xD1D0, "旃"), (0xD1D1, "旄"), (0xD1D2, "旂"), (0xD1D3, "晊"), (0xD1D4, "晟"), (0xD1D5, "晇"), (0xD1D6, "晑"),
    (0xD1D7, "朒"), (0xD1D8, "朓"), (0xD1D9, "栟"), (0xD1DA, "栚"), (0xD1DB, "桉"), (0xD1DC, "栲"), (0xD1DD, "栳"), (0xD1DE, "栻"),
    (0xD1DF, "桋"), (0xD1E0, "桏"), (0xD1E1, "栖"), (0xD1E2, "栱"), (0xD1E3, "栜"), (0xD1E4, "栵"), (0xD1E5, "栫"), (0xD1E6, "栭"),
    (0xD1E7, "栯"), (0xD1E8, "桎"), (0xD1E9, "桄"), (0xD1EA, "栴"), (0xD1EB, "栝"), (0xD1EC, "栒"), (0xD1ED, "栔"), (0xD1EE, "栦"),
    (0xD1EF, "栨"), (0xD1F0, "栮"), (0xD1F1, "桍"), (0xD1F2, "栺"), (0xD1F3, "栥"), (0xD1F4, "栠"), (0xD1F5, "欬"), (0xD1F6, "欯"),
    (0xD1F7, "欭"), (0xD1F8, "欱"), (0xD1F9, "欴"), (0xD1FA, "歭"), (0xD1FB, "肂"), (0xD1FC, "殈"), (0xD1FD, "毦"), (0xD1FE, "毤"),
    (0xD240, "毨"), (0xD241, "毣"), (0xD242, "毢"), (0xD243, "毧"), (0xD244, "氥"), (0xD245, "浺"), (0xD246, "浣"), (0xD247, "浤"),
    (0xD248, "浶"), (0xD249, "洍"), (0xD24A, "浡"), (0xD24B, "涒"), (0xD24C, "浘"), (0xD24D, "浢"), (0xD24E, "浭"), (0xD24F, "浯"),
    (0xD250, "涑"), (0xD251, "涍"), (0xD252, "淯"), (0xD253, "浿"), (0xD254, "涆"), (0xD255, "浞"), (0xD256, "浧"), (0xD257, "浠"),
    (0xD258, "涗"), (0xD259, "浰"), (0xD25A, "浼"), (0xD25B, "浟"), (0xD25C, "涂"), (0xD25D, "涘"), (0xD25E, "洯"), (0xD25F, "浨"),
    (0xD260, "涋"), (0xD261, "浾"), (0xD262, "涀"), (0xD263, "涄"), (0xD264, "洖"), (0xD265, "涃"), (0xD266, "浻"), (0xD267, "浽"),
    (0xD268, "浵"), (0xD269, "涐"), (0xD26A, "烜"), (0xD26B, "烓"), (0xD26C, "烑"), (0xD26D, "烝"), (0xD26E, "烋"), (0xD26F, "缹"),
    (0xD270, "烢"), (0xD271, "烗"), (0xD272, "烒"), (0xD273, "烞"), (0xD274, "烠"), (0xD275, "烔"), (0xD276, "烍"), (0xD277, "烅"),
    (0xD278, "烆"), (0xD279, "烇"), (0xD27A, "烚"), (0xD27B, "烎"), (0xD27C, "烡"), (0xD27D, "牂"), (0xD27E, "牸"), (0xD2A1, "牷"),
    (0xD2A2, "牶"), (0xD2A3, "猀"), (0xD2A4, "狺"), (0xD2A5, "狴"), (0xD2A6, "狾"), (0xD2A7, "狶"), (0xD2A8, "狳"), (0xD2A9, "狻"),
    (0xD2AA, "猁"), (0xD2AB, "珓"), (0xD2AC, "珙"), (0xD2AD, "珥"), (0xD2AE, "珖"), (0xD2AF, "玼"), (0xD2B0, "珧"), (0xD2B1, "珣"),
    (0xD2B2, "珩"), (0xD2B3, "珜"), (0xD2B4, "珒"), (0xD2B5, "珛"), (0xD2B6, "珔"), (0xD2B7, "珝"), (0xD2B8, "珚"), (0xD2B9, "珗"),
    (0xD2BA, "珘"), (0xD2BB, "珨"), (0xD2BC, "瓞"), (0xD2BD, "瓟"), (0xD2BE, "瓴"), (0xD2BF, "瓵"), (0xD2C0, "甡"), (0xD2C1, "畛"),
    (0xD2C2, "畟"), (0xD2C3, "疰"), (0xD2C4, "痁"), (0xD2C5, "疻"), (0xD2C6, "痄"), (0xD2C7, "痀"), (0xD2C8, "疿"), (0xD2C9, "疶"),
    (0xD2CA, "疺"), (0xD2CB, "皊"), (0xD2CC, "盉"), (0xD2CD, "眝"), (0xD2CE, "眛"), (0xD2CF, "眐"), (0xD2D0, "眓"), (0xD2D1, "眒"),
    (0xD2D2, "眣"), (0xD2D3, "眑"), (0xD2D4, "眕"), (0xD2D5, "眙"), (0xD2D6, "眚"), (0xD2D7, "眢"), (0xD2D8, "眧"), (0xD2D9, "砣"),
    (0xD2DA, "砬"), (0xD2DB, "砢"), (0xD2DC, "砵"), (0xD2DD, "砯"), (0xD2DE, "砨"), (0xD2DF, "砮"), (0xD2E0, "砫"), (0xD2E1, "砡"),
    (0xD2E2, "砩"), (0xD2E3, "砳"), (0xD2E4, "砪"), (0xD2E5, "砱"), (0xD2E6, "祔"), (0xD2E7, "祛"), (0xD2E8, "祏"), (0xD2E9, "祜"),
    (0xD2EA, "祓"), (0xD2EB, "祒"), (0xD2EC, "祑"), (0xD2ED, "秫"), (0xD2EE, "秬"), (0xD2EF, "秠"), (0xD2F0, "秮"), (0xD2F1, "秭"),
    (0xD2F2, "秪"), (0xD2F3, "秜"), (0xD2F4, "秞"), (0xD2F5, "秝"), (0xD2F6, "窆"), (0xD2F7, "窉"), (0xD2F8, "窅"), (0xD2F9, "窋"),
    (0xD2FA, "窌"), (0xD2FB, "窊"), (0xD2FC, "窇"), (0xD2FD, "竘"), (0xD2FE, "笐"), (0xD340, "笄"), (0xD341, "笓"), (0xD342, "笅"),
    (0xD343, "笏"), (0xD344, "笈"), (0xD345, "笊"), (0xD346, "笎"), (0xD347, "笉"), (0xD348, "笒"), (0xD349, "粄"), (0xD34A, "粑"),
    (0xD34B, "粊"), (0xD34C, "粌"), (0xD34D, "粈"), (0xD34E, "粍"), (0xD34F, "粅"), (0xD350, "紞"), (0xD351, "紝"), (0xD352, "紑"),
    (0xD353, "紎"), (0xD354, "紘"), (0xD355, "紖"), (0xD356, "紓"), (0xD357, "紟"), (0xD358, "紒"), (0xD359, "紏"), (0xD35A, "紌"),
    (0xD35B, "罜"), (0xD35C, "罡"), (0xD35D, "罞"), (0xD35E, "罠"), (0xD35F, "罝"), (0xD360, "罛"), (0xD361, "羖"), (0xD362, "羒"),
    (0xD363, "翃"), (0xD364, "翂"), (0xD365, "翀"), (0xD366, "耖"), (0xD367, "耾"), (0xD368, "耹"), (0xD369, "胺"), (0xD36A, "胲"),
    (0xD36B, "胹"), (0xD36C, "胵"), (0xD36D, "脁"), (0xD36E, "胻"), (0xD36F, "脀"), (0xD370, "舁"), (0xD371, "舯"), (0xD372, "舥"),
    (0xD373, "茳"), (0xD374, "茭"), (0xD375, "荄"), (0xD376, "茙"), (0xD377, "荑"), (0xD378, "茥"), (0xD379, "荖"), (0xD37A, "茿"),
    (0xD37B, "荁"), (0xD37C, "茦"), (0xD37D, "茜"), (0xD37E, "茢"), (0xD3A1, "荂"), (0xD3A2, "荎"), (0xD3A3, "茛"), (0xD3A4, "茪"),
    (0xD3A5, "茈"), (0xD3A6, "茼"), (0xD3A7, "荍"), (0xD3A8, "茖"), (0xD3A9, "茤"), (0xD3AA, "茠"), (0xD3AB, "茷"), (0xD3AC, "茯"),
    (0xD3AD, "茩"), (0xD3AE, "荇"), (0xD3AF, "荅"), (0xD3B0, "荌"), (0xD3B1, "荓"), (0xD3B2, "茞"), (0xD3B3, "茬"), (0xD3B4, "荋"),
    (0xD3B5, "茧"), (0xD3B6, "荈"), (0xD3B7, "虓"), (0xD3B8, "虒"), (0xD3B9, "蚢"), (0xD3BA, "蚨"), (0xD3BB, "蚖"), (0xD3BC, "蚍"),
    (0xD3BD, "蚑"), (0xD3BE, "蚞"), (0xD3BF, "蚇"), (0xD3C0, "蚗"), (0xD3C1, "蚆"), (0xD3C2, "蚋"), (0xD3C3, "蚚"), (0xD3C4, "蚅"),
    (0xD3C5, "蚥"), (0xD3C6, "蚙"), (0xD3C7, "蚡"), (0xD3C8, "蚧"), (0xD3C9, "蚕"), (0xD3CA, "蚘"), (0xD3CB, "蚎"), (0xD3CC, "蚝"),
    (0xD3CD, "蚐"), (0xD3CE, "蚔"), (0xD3CF, "衃"), (0xD3D0, "衄"), (0xD3D1, "衭"), (0xD3D2, "衵"), (0xD3D3, "衶"), (0xD3D4, "衲"),
    (0xD3D5, "袀"), (0xD3D6, "衱"), (0xD3D7, "衿"), (0xD3D8, "衯"), (0xD3D9, "袃"), (0xD3DA, "衾"), (0xD3DB, "衴"), (0xD3DC, "衼"),
    (0xD3DD, "訒"), (0xD3DE, "豇"), (0xD3DF, "豗"), (0xD3E0, "豻"), (0xD3E1, "貤"), (0xD3E2, "貣"), (0xD3E3, "赶"), (0xD3E4, "赸"),
    (0xD3E5, "趵"), (0xD3E6, "趷"), (0xD3E7, "趶"), (0xD3E8, "軑"), (0xD3E9, "軓"), (0xD3EA, "迾"), (0xD3EB, "迵"), (0xD3EC, "适"),
    (0xD3ED, "迿"), (0xD3EE, "迻"), (0xD3EF, "逄"), (0xD3F0, "迼"), (0xD3F1, "迶"), (0xD3F2, "郖"), (0xD3F3, "郠"), (0xD3F4, "郙"),
    (0xD3F5, "郚"), (0xD3F6, "郣"), (0xD3F7, "郟"), (0xD3F8, "郥"), (0xD3F9, "郘"), (0xD3FA, "郛"), (0xD3FB, "郗"), (0xD3FC, "郜"),
    (0xD3FD, "郤"), (0xD3FE, "酐"), (0xD440, "酎"), (0xD441, "酏"), (0xD442, "釕"), (0xD443, "釢"), (0xD444, "釚"), (0xD445, "陜"),
    (0xD446, "陟"), (0xD447, "隼"), (0xD448, "飣"), (0xD449, "髟"), (0xD44A, "鬯"), (0xD44B, "乿"), (0xD44C, "偰"), (0xD44D, "偪"),
    (0xD44E, "偡"), (0xD44F, "偞"), (0xD450, "偠"), (0xD451, "偓"), (0xD452, "偋"), (0xD453, "偝"), (0xD454, "偲"), (0xD455, "偈"),
    (0xD456, "偍"), (0xD457, "偁"), (0xD458, "偛"), (0xD459, "偊"), (0xD45A, "偢"), (0xD45B, "倕"), (0xD45C, "偅"), (0xD45D, "偟"),
    (0xD45E, "偩"), (0xD45F, "偫"), (0xD460, "偣"), (0xD461, "偤"), (0xD462, "偆"), (0xD463, "偀"), (0xD464, "偮"), (0xD465, "偳"),
    (0xD466, "偗"), (0xD467, "偑"), (0xD468, "凐"), (0xD469, "剫"), (0xD46A, "剭"), (0xD46B, "剬"), (0xD46C, "剮"), (0xD46D, "勖"),
    (0xD46E, "勓"), (0xD46F, "匭"), (0xD470, "厜"), (0xD471, "啵"), (0xD472, "啶"), (0xD473, "唼"), (0xD474, "啍"), (0xD475, "啐"),
    (0xD476, "唴"), (0xD477, "唪"), (0xD478, "啑"), (0xD479, "啢"), (0xD47A, "唶"), (0xD47B, "唵"), (0xD47C, "唰"), (0xD47D, "啒"),
    (0xD47E, "啅"), (0xD4A1, "唌"), (0xD4A2, "唲"), (0xD4A3, "啥"), (0xD4A4, "啎"), (0xD4A5, "唹"), (0xD4A6, "啈"), (0xD4A7, "唭"),
    (0xD4A8, "唻"), (0xD4A9, "啀"), (0xD4AA, "啋"), (0xD4AB, "圊"), (0xD4AC, "圇"), (0xD4AD, "埻"), (0xD4AE, "堔"), (0xD4AF, "埢"),
    (0xD4B0, "埶"), (0xD4B1, "埜"), (0xD4B2, "埴"), (0xD4B3, "堀"), (0xD4B4, "埭"), (0xD4B5, "埽"), (0xD4B6, "堈"), (0xD4B7, "埸"),
    (0xD4B8, "堋"), (0xD4B9, "埳"), (0xD4BA, "埏"), (0xD4BB, "堇"), (0xD4BC, "埮"), (0xD4BD, "埣"), (0xD4BE, "埲"), (0xD4BF, "埥"),
    (0xD4C0, "埬"), (0xD4C1, "埡"), (0xD4C2, "堎"), (0xD4C3, "埼"), (0xD4C4, "堐"), (0xD4C5, "埧"), (0xD4C6, "堁"), (0xD4C7, "堌"),
    (0xD4C8, "埱"), (0xD4C9, "埩"), (0xD4CA, "埰"), (0xD4CB, "堍"), (0xD4CC, "堄"), (0xD4CD, "奜"), (0xD4CE, "婠"), (0xD4CF, "婘"),
    (0xD4D0, "婕"), (0xD4D1, "婧"), (0xD4D2, "婞"), (0xD4D3, "娸"), (0xD4D4, "娵"), (0xD4D5, "婭"), (0xD4D6, "婐"), (0xD4D7, "婟"),
    (0xD4D8, "婥"), (0xD4D9, "婬"), (0xD4DA, "婓"), (0xD4DB, "婤"), (0xD4DC, "婗"), (0xD4DD, "婃"), (0xD4DE, "婝"), (0xD4DF, "婒"),
    (0xD4E0, "婄"), (0xD4E1, "婛"), (0xD4E2, "婈"), (0xD4E3, "媎"), (0xD4E4, "娾"), (0xD4E5, "婍"), (0xD4E6, "娹"), (0xD4E7, "婌"),
    (0xD4E8, "婰"), (0xD4E9, "婩"), (0xD4EA, "婇"), (0xD4EB, "婑"), (0xD4EC, "婖"), (0xD4ED, "婂"), (0xD4EE, "婜"), (0xD4EF, "孲"),
    (0xD4F0, "孮"), (0xD4F1, "寁"), (0xD4F2, "寀"), (0xD4F3, "屙"), (0xD4F4, "崞"), (0xD4F5, "崋"), (0xD4F6, "崝"), (0xD4F7, "崚"),
    (0xD4F8, "崠"), (0xD4F9, "崌"), (0xD4FA, "崨"), (0xD4FB, "崍"), (0xD4FC, "崦"), (0xD4FD, "崥"), (0xD4FE, "崏"), (0xD540, "崰"),
    (0xD541, "崒"), (0xD542, "崣"), (0xD543, "崟"), (0xD544, "崮"), (0xD545, "帾"), (0xD546, "帴"), (0xD547, "庱"), (0xD548, "庴"),
    (0xD549, "庹"), (0xD54A, "庲"), (0xD54B, "庳"), (0xD54C, "弶"), (0xD54D, "弸"), (0xD54E, "徛"), (0xD54F, "徖"), (0xD550, "徟"),
    (0xD551, "悊"), (0xD552, "悐"), (0xD553, "悆"), (0xD554, "悾"), (0xD555, "悰"), (0xD556, "悺"), (0xD557, "惓"), (0xD558, "惔"),
    (0xD559, "惏"), (0xD55A, "惤"), (0xD55B, "惙"), (0xD55C, "惝"), (0xD55D, "惈"), (0xD55E, "悱"), (0xD55F, "惛"), (0xD560, "悷"),
    (0xD561, "惊"), (0xD562, "悿"), (0xD563, "惃"), (0xD564, "惍"), (0xD565, "惀"), (0xD566, "挲"), (0xD567, "捥"), (0xD568, "掊"),
    (0xD569, "掂"), (0xD56A, "捽"), (0xD56B, "掽"), (0xD56C, "掞"), (0xD56D, "掭"), (0xD56E, "掝"), (0xD56F, "掗"), (0xD570, "掫"),
    (0xD571, "掎"), (0xD572, "捯"), (0xD573, "掇"), (0xD574, "掐"), (0xD575, "据"), (0xD576, "掯"), (0xD577, "捵"), (0xD578, "掜"),
    (0xD579, "捭"), (0xD57A, "掮"), (0xD57B, "捼"), (0xD57C, "掤"), (0xD57D, "挻"), (0xD57E, "掟"), (0xD5A1, "捸"), (0xD5A2, "掅"),
    (0xD5A3, "掁"), (0xD5A4, "掑"), (0xD5A5, "掍"), (0xD5A6, "捰"), (0xD5A7, "敓"), (0xD5A8, "旍"), (0xD5A9, "晥"), (0xD5AA, "晡"),
    (0xD5AB, "晛"), (0xD5AC, "晙"), (0xD5AD, "晜"), (0xD5AE, "晢"), (0xD5AF, "朘"), (0xD5B0, "桹"), (0xD5B1, "梇"), (0xD5B2, "梐"),
    (0xD5B3, "梜"), (0xD5B4, "桭"), (0xD5B5, "桮"), (0xD5B6, "梮"), (0xD5B7, "梫"), (0xD5B8, "楖"), (0xD5B9, "桯"), (0xD5BA, "梣"),
    (0xD5BB, "梬"), (0xD5BC, "梩"), (0xD5BD, "桵"), (0xD5BE, "桴"), (0xD5BF, "梲"), (0xD5C0, "梏"), (0xD5C1, "桷"), (0xD5C2, "梒"),
    (0xD5C3, "桼"), (0xD5C4, "桫"), (0xD5C5, "桲"), (0xD5C6, "梪"), (0xD5C7, "梀"), (0xD5C8, "桱"), (0xD5C9, "桾"), (0xD5CA, "梛"),
    (0xD5CB, "梖"), (0xD5CC, "梋"), (0xD5CD, "梠"), (0xD5CE, "梉"), (0xD5CF, "梤"), (0xD5D0, "桸"), (0xD5D1, "桻"), (0xD5D2, "梑"),
    (0xD5D3, "梌"), (0xD5D4, "梊"), (0xD5D5, "桽"), (0xD5D6, "欶"), (0xD5D7, "欳"), (0xD5D8, "欷"), (0xD5D9, "欸"), (0xD5DA, "殑"),
    (0xD5DB, "殏"), (0xD5DC, "殍"), (0xD5DD, "殎"), (0xD5DE, "殌"), (0xD5DF, "氪"), (0xD5E0, "淀"), (0xD5E1, "涫"), (0xD5E2, "涴"),
    (0xD5E3, "涳"), (0xD5E4, "湴"), (0xD5E5, "涬"), (0xD5E6, "淩"), (0xD5E7, "淢"), (0xD5E8, "涷"), (0xD5E9, "淶"), (0xD5EA, "淔"),
    (0xD5EB, "渀"), (0xD5EC, "淈"), (0xD5ED, "淠"), (0xD5EE, "淟"), (0xD5EF, "淖"), (0xD5F0, "涾"), (0xD5F1, "淥"), (0xD5F2, "淜"),
    (0xD5F3, "淝"), (0xD5F4, "淛"), (0xD5F5, "淴"), (0xD5F6, "淊"), (0xD5F7, "涽"), (0xD5F8, "淭"), (0xD5F9, "淰"), (0xD5FA, "涺"),
    (0xD5FB, "淕"), (0xD5FC, "淂"), (0xD5FD, "淏"), (0xD5FE, "淉"), (0xD640, "淐"), (0xD641, "淲"), (0xD642, "淓"), (0xD643, "淽"),
    (0xD644, "淗"), (0xD645, "淍"), (0xD646, "淣"), (0xD647, "涻"), (0xD648, "烺"), (0xD649, "焍"), (0xD64A, "烷"), (0xD64B, "焗"),
    (0xD64C, "烴"), (0xD64D, "焌"), (0xD64E, "烰"), (0xD64F, "焄"), (0xD650, "烳"), (0xD651, "焐"), (0xD652, "烼"), (0xD653, "烿"),
    (0xD654, "焆"), (0xD655, "焓"), (0xD656, "焀"), (0xD657, "烸"), (0xD658, "烶"), (0xD659, "焋"), (0xD65A, "焂"), (0xD65B, "焎"),
    (0xD65C, "牾"), (0xD65D, "牻"), (0xD65E, "牼"), (0xD65F, "牿"), (0xD660, "猝"), (0xD661, "猗"), (0xD662, "猇"), (0xD663, "猑"),
    (0xD664, "猘"), (0xD665, "猊"), (0xD666, "猈"), (0xD667, "狿"), (0xD668, "猏"), (0xD669, "猞"), (0xD66A, "玈"), (0xD66B, "珶"),
    (0xD66C, "珸"), (0xD66D, "珵"), (0xD66E, "琄"), (0xD66F, "琁"), (0xD670, "珽"), (0xD671, "琇"), (0xD672, "琀"), (0xD673, "珺"),
    (0xD674, "珼"), (0xD675, "珿"), (0xD676, "琌"), (0xD677, "琋"), (0xD678, "珴"), (0xD679, "琈"), (0xD67A, "畤"), (0xD67B, "畣"),
    (0xD67C, "痎"), (0xD67D, "痒"), (0xD67E, "痏"), (0xD6A1, "痋"), (0xD6A2, "痌"), (0xD6A3, "痑"), (0xD6A4, "痐"), (0xD6A5, "皏"),
    (0xD6A6, "皉"), (0xD6A7, "盓"), (0xD6A8, "眹"), (0xD6A9, "眯"), (0xD6AA, "眭"), (0xD6AB, "眱"), (0xD6AC, "眲"), (0xD6AD, "眴"),
    (0xD6AE, "眳"), (0xD6AF, "眽"), (0xD6B0, "眥"), (0xD6B1, "眻"), (0xD6B2, "眵"), (0xD6B3, "硈"), (0xD6B4, "硒"), (0xD6B5, "硉"),
    (0xD6B6, "硍"), (0xD6B7, "硊"), (0xD6B8, "硌"), (0xD6B9, "砦"), (0xD6BA, "硅"), (0xD6BB, "硐"), (0xD6BC, "祤"), (0xD6BD, "祧"),
    (0xD6BE, "祩"), (0xD6BF, "祪"), (0xD6C0, "祣"), (0xD6C1, "祫"), (0xD6C2, "祡"), (0xD6C3, "离"), (0xD6C4, "秺"), (0xD6C5, "秸"),
    (0xD6C6, "秶"), (0xD6C7, "秷"), (0xD6C8, "窏"), (0xD6C9, "窔"), (0xD6CA, "窐"), (0xD6CB, "笵"), (0xD6CC, "筇"), (0xD6CD, "笴"),
    (0xD6CE, "笥"), (0xD6CF, "笰"), (0xD6D0, "笢"), (0xD6D1, "笤"), (0xD6D2, "笳"), (0xD6D3, "笘"), (0xD6D4, "笪"), (0xD6D5, "笝"),
    (0xD6D6, "笱"), (0xD6D7, "笫"), (0xD6D8, "笭"), (0xD6D9, "笯"), (0xD6DA, "笲"), (0xD6DB, "笸"), (0xD6DC, "笚"), (0xD6DD, "笣"),
    (0xD6DE, "粔"), (0xD6DF, "粘"), (0xD6E0, "粖"), (0xD6E1, "粣"), (0xD6E2, "紵"), (0xD6E3, "紽"), (0xD6E4, "紸"), (0xD6E5, "紶"),
    (0xD6E6, "紺"), (0xD6E7, "絅"), (0xD6E8, "紬"), (0xD6E9, "紩"), (0xD6EA, "絁"), (0xD6EB, "絇"), (0xD6EC, "紾"), (0xD6ED, "紿"),
    (0xD6EE, "絊"), (0xD6EF, "紻"), (0xD6F0, "紨"), (0xD6F1, "罣"), (0xD6F2, "羕"), (0xD6F3, "羜"), (0xD6F4, "羝"), (0xD6F5, "羛"),
    (0xD6F6, "翊"), (0xD6F7, "翋"), (0xD6F8, "翍"), (0xD6F9, "翐"), (0xD6FA, "翑"), (0xD6FB, "翇"), (0xD6FC, "翏"), (0xD6FD, "翉"),
    (0xD6FE, "耟"), (0xD740, "耞"), (0xD741, "耛"), (0xD742, "聇"), (0xD743, "聃"), (0xD744, "聈"), (0xD745, "脘"), (0xD746, "脥"),
    (0xD747, "脙"), (0xD748, "脛"), (0xD749, "脭"), (0xD74A, "脟"), (0xD74B, "脬"), (0xD74C, "脞"), (0xD74D, "脡"), (0xD74E, "脕"),
    (0xD74F, "脧"), (0xD750, "脝"), (0xD751, "脢"), (0xD752, "舑"), (0xD753, "舸"), (0xD754, "舳"), (0xD755, "舺"), (0xD756, "舴"),
    (0xD757, "舲"), (0xD758, "艴"), (0xD759, "莐"), (0xD75A, "莣"), (0xD75B, "莨"), (0xD75C, "莍"), (0xD75D, "荺"), (0xD75E, "荳"),
    (0xD75F, "莤"), (0xD760, "荴"), (0xD761, "莏"), (0xD762, "莁"), (0xD763, "莕"), (0xD764, "莙"), (0xD765, "荵"), (0xD766, "莔"),
    (0xD767, "莩"), (0xD768, "荽"), (0xD769, "莃"), (0xD76A, "莌"), (0xD76B, "莝"), (0xD76C, "莛"), (0xD76D, "莪"), (0xD76E, "莋"),
    (0xD76F, "荾"), (0xD770, "莥"), (0xD771, "莯"), (0xD772, "莈"), (0xD773, "莗"), (0xD774, "莰"), (0xD775, "荿"), (0xD776, "莦"),
    (0xD777, "莇"), (0xD778, "莮"), (0xD779, "荶"), (0xD77A, "莚"), (0xD77B, "虙"), (0xD77C, "虖"), (0xD77D, "蚿"), (0xD77E, "蚷"),
    (0xD7A1, "蛂"), (0xD7A2, "蛁"), (0xD7A3, "蛅"), (0xD7A4, "蚺"), (0xD7A5, "蚰"), (0xD7A6, "蛈"), (0xD7A7, "蚹"), (0xD7A8, "蚳"),
    (0xD7A9, "蚸"), (0xD7AA, "蛌"), (0xD7AB, "蚴"), (0xD7AC, "蚻"), (0xD7AD, "蚼"), (0xD7AE, "蛃"), (0xD7AF, "蚽"), (0xD7B0, "蚾"),
    (0xD7B1, "衒"), (0xD7B2, "袉"), (0xD7B3, "袕"), (0xD7B4, "袨"), (0xD7B5, "袢"), (0xD7B6, "袪"), (0xD7B7, "袚"), (0xD7B8, "袑"),
    (0xD7B9, "袡"), (0xD7BA, "袟"), (0xD7BB, "袘"), (0xD7BC, "袧"), (0xD7BD, "袙"), (0xD7BE, "袛"), (0xD7BF, "袗"), (0xD7C0, "袤"),
    (0xD7C1, "袬"), (0xD7C2, "袌"), (0xD7C3, "袓"), (0xD7C4, "袎"), (0xD7C5, "覂"), (0xD7C6, "觖"), (0xD7C7, "觙"), (0xD7C8, "觕"),
    (0xD7C9, "訰"), (0xD7CA, "訧"), (0xD7CB, "訬"), (0xD7CC, "訞"), (0xD7CD, "谹"), (0xD7CE, "谻"), (0xD7CF, "豜"), (0xD7D0, "豝"),
    (0xD7D1, "豽"), (0xD7D2, "貥"), (0xD7D3, "赽"), (0xD7D4, "赻"), (0xD7D5, "赹"), (0xD7D6, "趼"), (0xD7D7, "跂"), (0xD7D8, "趹"),
    (0xD7D9, "趿"), (0xD7DA, "跁"), (0xD7DB, "軘"), (0xD7DC, "軞"), (0xD7DD, "軝"), (0xD7DE, "軜"), (0xD7DF, "軗"), (0xD7E0, "軠"),
    (0xD7E1, "軡"), (0xD7E2, "逤"), (0xD7E3, "逋"), (0xD7E4, "逑"), (0xD7E5, "逜"), (0xD7E6, "逌"), (0xD7E7, "逡"), (0xD7E8, "郯"),
    (0xD7E9, "郪"), (0xD7EA, "郰"), (0xD7EB, "郴"), (0xD7EC, "郲"), (0xD7ED, "郳"), (0xD7EE, "郔"), (0xD7EF, "郫"), (0xD7F0, "郬"),
    (0xD7F1, "郩"), (0xD7F2, "酖"), (0xD7F3, "酘"), (0xD7F4, "酚"), (0xD7F5, "酓"), (0xD7F6, "酕"), (0xD7F7, "釬"), (0xD7F8, "釴"),
    (0xD7F9, "釱"), (0xD7FA, "釳"), (0xD7FB, "釸"), (0xD7FC, "釤"), (0xD7FD, "釹"), (0xD7FE, "釪"), (0xD840, "釫"), (0xD841, "釷"),
    (0xD842, "釨"), (0xD843, "釮"), (0xD844, "镺"), (0xD845, "閆"), (0xD846, "閈"), (0xD847, "陼"), (0xD848, "陭"), (0xD849, "陫"),
    (0xD84A, "陱"), (0xD84B, "陯"), (0xD84C, "隿"), (0xD84D, "靪"), (0xD84E, "頄"), (0xD84F, "飥"), (0xD850, "馗"), (0xD851, "傛"),
    (0xD852, "傕"), (0xD853, "傔"), (0xD854, "傞"), (0xD855, "傋"), (0xD856, "傣"), (0xD857, "傃"), (0xD858, "傌"), (0xD859, "傎"),
    (0xD85A, "傝"), (0xD85B, "偨"), (0xD85C, "傜"), (0xD85D, "傒"), (0xD85E, "傂"), (0xD85F, "傇"), (0xD860, "兟"), (0xD861, "凔"),
    (0xD862, "匒"), (0xD863, "匑"), (0xD864, "厤"), (0xD865, "厧"), (0xD866, "喑"), (0xD867, "喨"), (0xD868, "喥"), (0xD869, "喭"),
    (0xD86A, "啷"), (0xD86B, "噅"), (0xD86C, "喢"), (0xD86D, "喓"), (0xD86E, "喈"), (0xD86F, "喏"), (0xD870, "喵"), (0xD871, "喁"),
    (0xD872, "喣"), (0xD873, "喒"), (0xD874, "喤"), (0xD875, "啽"), (0xD876, "喌"), (0xD877, "喦"), (0xD878, "啿"), (0xD879, "喕"),
    (0xD87A, "喡"), (0xD87B, "喎"), (0xD87C, "圌"), (0xD87D, "堩"), (0xD87E, "堷"), (0xD8A1, "堙"), (0xD8A2, "堞"), (0xD8A3, "堧"),
    (0xD8A4, "堣"), (0xD8A5, "堨"), (0xD8A6, "埵"), (0xD8A7, "塈"), (0xD8A8, "堥"), (0xD8A9, "堜"), (0xD8AA, "堛"), (0xD8AB, "堳"),
    (0xD8AC, "堿"), (0xD8AD, "堶"), (0xD8AE, "堮"), (0xD8AF, "堹"), (0xD8B0, "堸"), (0xD8B1, "堭"), (0xD8B2, "堬"), (0xD8B3, "堻"),
    (0xD8B4, "奡"), (0xD8B5, "媯"), (0xD8B6, "媔"), (0xD8B7, "媟"), (0xD8B8, "婺"), (0xD8B9, "媢"), (0xD8BA, "媞"), (0xD8BB, "婸"),
    (0xD8BC, "媦"), (0xD8BD, "婼"), (0xD8BE, "媥"), (0xD8BF, "媬"), (0xD8C0, "媕"), (0xD8C1, "媮"), (0xD8C2, "娷"), (0xD8C3, "媄"),
    (0xD8C4, "媊"), (0xD8C5, "媗"), (0xD8C6, "媃"), (0xD8C7, "媋"), (0xD8C8, "媩"), (0xD8C9, "婻"), (0xD8CA, "婽"), (0xD8CB, "媌"),
    (0xD8CC, "媜"), (0xD8CD, "媏"), (0xD8CE, "媓"), (0xD8CF, "媝"), (0xD8D0, "寪"), (0xD8D1, "寍"), (0xD8D2, "寋"), (0xD8D3, "寔"),
    (0xD8D4, "寑"), (0xD8D5, "寊"), (0xD8D6, "寎"), (0xD8D7, "尌"), (0xD8D8, "尰"), (0xD8D9, "崷"), (0xD8DA, "嵃"), (0xD8DB, "嵫"),
    (0xD8DC, "嵁"), (0xD8DD, "嵋"), (0xD8DE, "崿"), (0xD8DF, "崵"), (0xD8E0, "嵑"), (0xD8E1, "嵎"), (0xD8E2, "嵕"), (0xD8E3, "崳"),
    (0xD8E4, "崺"), (0xD8E5, "嵒"), (0xD8E6, "崽"), (0xD8E7, "崱"), (0xD8E8, "嵙"), (0xD8E9, "嵂"), (0xD8EA, "崹"), (0xD8EB, "嵉"),
    (0xD8EC, "崸"), (0xD8ED, "崼"), (0xD8EE, "崲"), (0xD8EF, "崶"), (0xD8F0, "嵀"), (0xD8F1, "嵅"), (0xD8F2, "幄"), (0xD8F3, "幁"),
    (0xD8F4, "彘"), (0xD8F5, "徦"), (0xD8F6, "徥"), (0xD8F7, "徫"), (0xD8F8, "惉"), (0xD8F9, "悹"), (0xD8FA, "惌"), (0xD8FB, "惢"),
    (0xD8FC, "惎"), (0xD8FD, "惄"), (0xD8FE, "愔"), (0xD940, "惲"), (0xD941, "愊"), (0xD942, "愖"), (0xD943, "愅"), (0xD944, "惵"),
    (0xD945, "愓"), (0xD946, "惸"), (0xD947, "惼"), (0xD948, "惾"), (0xD949, "惁"), (0xD94A, "愃"), (0xD94B, "愘"), (0xD94C, "愝"),
    (0xD94D, "愐"), (0xD94E, "惿"), (0xD94F, "愄"), (0xD950, "愋"), (0xD951, "扊"), (0xD952, "掔"), (0xD953, "掱"), (0xD954, "掰"),
    (0xD955, "揎"), (0xD956, "揥"), (0xD957, "揨"), (0xD958, "揯"), (0xD959, "揃"), (0xD95A, "撝"), (0xD95B, "揳"), (0xD95C, "揊"),
    (0xD95D, "揠"), (0xD95E, "揶"), (0xD95F, "揕"), (0xD960, "揲"), (0xD961, "揵"), (0xD962, "摡"), (0xD963, "揟"), (0xD964, "掾"),
    (0xD965, "揝"), (0xD966, "揜"), (0xD967, "揄"), (0xD968, "揘"), (0xD969, "揓"), (0xD96A, "揂"), (0xD96B, "揇"), (0xD96C, "揌"),
    (0xD96D, "揋"), (0xD96E, "揈"), (0xD96F, "揰"), (0xD970, "揗"), (0xD971, "揙"), (0xD972, "攲"), (0xD973, "敧"), (0xD974, "敪"),
    (0xD975, "敤"), (0xD976, "敜"), (0xD977, "敨"), (0xD978, "敥"), (0xD979, "斌"), (0xD97A, "斝"), (0xD97B, "斞"), (0xD97C, "斮"),
    (0xD97D, "旐"), (0xD97E, "旒"), (0xD9A1, "晼"), (0xD9A2, "晬"), (0xD9A3, "晻"), (0xD9A4, "暀"), (0xD9A5, "晱"), (0xD9A6, "晹"),
    (0xD9A7, "晪"), (0xD9A8, "晲"), (0xD9A9, "朁"), (0xD9AA, "椌"), (0xD9AB, "棓"), (0xD9AC, "椄"), (0xD9AD, "棜"), (0xD9AE, "椪"),
    (0xD9AF, "棬"), (0xD9B0, "棪"), (0xD9B1, "棱"), (0xD9B2, "椏"), (0xD9B3, "棖"), (0xD9B4, "棷"), (0xD9B5, "棫"), (0xD9B6, "棤"),
    (0xD9B7, "棶"), (0xD9B8, "椓"), (0xD9B9, "椐"), (0xD9BA, "棳"), (0xD9BB, "棡"), (0xD9BC, "椇"), (0xD9BD, "棌"), (0xD9BE, "椈"),
    (0xD9BF, "楰"), (0xD9C0, "梴"), (0xD9C1, "椑"), (0xD9C2, "棯"), (0xD9C3, "棆"), (0xD9C4, "椔"), (0xD9C5, "棸"), (0xD9C6, "棐"),
    (0xD9C7, "棽"), (0xD9C8, "棼"), (0xD9C9, "棨"), (0xD9CA, "椋"), (0xD9CB, "椊"), (0xD9CC, "椗"), (0xD9CD, "棎"), (0xD9CE, "棈"),
    (0xD9CF, "棝"), (0xD9D0, "棞"), (0xD9D1, "棦"), (0xD9D2, "棴"), (0xD9D3, "棑"), (0xD9D4, "椆"), (0xD9D5, "棔"), (0xD9D6, "棩"),
    (0xD9D7, "椕"), (0xD9D8, "椥"), (0xD9D9, "棇"), (0xD9DA, "欹"), (0xD9DB, "欻"), (0xD9DC, "欿"), (0xD9DD, "欼"), (0xD9DE, "殔"),
    (0xD9DF, "殗"), (0xD9E0, "殙"), (0xD9E1, "殕"), (0xD9E2, "殽"), (0xD9E3, "毰"), (0xD9E4, "毲"), (0xD9E5, "毳"), (0xD9E6, "氰"),
    (0xD9E7, "淼"), (0xD9E8, "湆"), (0xD9E9, "湇"), (0xD9EA, "渟"), (0xD9EB, "湉"), (0xD9EC, "溈"), (0xD9ED, "渼"), (0xD9EE, "渽"),
    (0xD9EF, "湅"), (0xD9F0, "湢"), (0xD9F1, "渫"), (0xD9F2, "渿"), (0xD9F3, "湁"), (0xD9F4, "湝"), (0xD9F5, "湳"), (0xD9F6, "渜"),
    (0xD9F7, "渳"), (0xD9F8, "湋"), (0xD9F9, "湀"), (0xD9FA, "湑"), (0xD9FB, "渻"), (0xD9FC, "渃"), (0xD9FD, "渮"), (0xD9FE, "湞"),
    (0xDA40, "湨"), (0xDA41, "湜"), (0xDA42, "湡"), (0xDA43, "渱"), (0xDA44, "渨"), (0xDA45, "湠"), (0xDA46, "湱"), (0xDA47, "湫"),
    (0xDA48, "渹"), (0xDA49, "渢"), (0xDA4A, "渰"), (0xDA4B, "湓"), (0xDA4C, "湥"), (0xDA4D, "渧"), (0xDA4E, "湸"), (0xDA4F, "湤"),
    (0xDA50, "湷"), (0xDA51, "湕"), (0xDA52, "湹"), (0xDA53, "湒"), (0xDA54, "湦"), (0xDA55, "渵"), (0xDA56, "渶"), (0xDA57, "湚"),
    (0xDA58, "焠"), (0xDA59, "焞"), (0xDA5A, "焯"), (0xDA5B, "烻"), (0xDA5C, "焮"), (0xDA5D, "焱"), (0xDA5E, "焣"), (0xDA5F, "焥"),
    (0xDA60, "焢"), (0xDA61, "焲"), (0xDA62, "焟"), (0xDA63, "焨"), (0xDA64, "焺"), (0xDA65, "焛"), (0xDA66, "牋"), (0xDA67, "牚"),
    (0xDA68, "犈"), (0xDA69, "犉"), (0xDA6A, "犆"), (0xDA6B, "犅"), (0xDA6C, "犋"), (0xDA6D, "猒"), (0xDA6E, "猋"), (0xDA6F, "猰"),
    (0xDA70, "猢"), (0xDA71, "猱"), (0xDA72, "猳"), (0xDA73, "猧"), (0xDA74, "猲"), (0xDA75, "猭"), (0xDA76, "猦"), (0xDA77, "猣"),
    (0xDA78, "猵"), (0xDA79, "猌"), (0xDA7A, "琮"), (0xDA7B, "琬"), (0xDA7C, "琰"), (0xDA7D, "琫"), (0xDA7E, "琖"), (0xDAA1, "琚"),
    (0xDAA2, "琡"), (0xDAA3, "琭"), (0xDAA4, "琱"), (0xDAA5, "琤"), (0xDAA6, "琣"), (0xDAA7, "琝"), (0xDAA8, "琩"), (0xDAA9, "琠"),
    (0xDAAA, "琲"), (0xDAAB, "瓻"), (0xDAAC, "甯"), (0xDAAD, "畯"), (0xDAAE, "畬"), (0xDAAF, "痧"), (0xDAB0, "痚"), (0xDAB1, "痡"),
    (0xDAB2, "痦"), (0xDAB3, "痝"), (0xDAB4, "痟"), (0xDAB5, "痤"), (0xDAB6, "痗"), (0xDAB7, "皕"), (0xDAB8, "皒"), (0xDAB9, "盚"),
    (0xDABA, "睆"), (0xDABB, "睇"), (0xDABC, "睄"), (0xDABD, "睍"), (0xDABE, "睅"), (0xDABF, "睊"), (0xDAC0, "睎"), (0xDAC1, "睋"),
    (0xDAC2, "睌"), (0xDAC3, "矞"), (0xDAC4, "矬"), (0xDAC5, "硠"), (0xDAC6, "硤"), (0xDAC7, "硥"), (0xDAC8, "硜"), (0xDAC9, "硭"),
    (0xDACA, "硱"), (0xDACB, "硪"), (0xDACC, "确"), (0xDACD, "硰"), (0xDACE, "硩"), (0xDACF, "硨"), (0xDAD0, "硞"), (0xDAD1, "硢"),
    (0xDAD2, "祴"), (0xDAD3, "祳"), (0xDAD4, "祲"), (0xDAD5, "祰"), (0xDAD6, "稂"), (0xDAD7, "稊"), (0xDAD8, "稃"), (0xDAD9, "稌"),
    (0xDADA, "稄"), (0xDADB, "窙"), (0xDADC, "竦"), (0xDADD, "竤"), (0xDADE, "筊"), (0xDADF, "笻"), (0xDAE0, "筄"), (0xDAE1, "筈"),
    (0xDAE2, "筌"), (0xDAE3, "筎"), (0xDAE4, "筀"), (0xDAE5, "筘"), (0xDAE6, "筅"), (0xDAE7, "粢"), (0xDAE8, "粞"), (0xDAE9, "粨"),
    (0xDAEA, "粡"), (0xDAEB, "絘"), (0xDAEC, "絯"), (0xDAED, "絣"), (0xDAEE, "絓"), (0xDAEF, "絖"), (0xDAF0, "絧"), (0xDAF1, "絪"),
    (0xDAF2, "絏"), (0xDAF3, "絭"), (0xDAF4, "絜"), (0xDAF5, "絫"), (0xDAF6, "絒"), (0xDAF7, "絔"), (0xDAF8, "絩"), (0xDAF9, "絑"),
    (0xDAFA, "絟"), (0xDAFB, "絎"), (0xDAFC, "缾"), (0xDAFD, "缿"), (0xDAFE, "罥"), (0xDB40, "罦"), (0xDB41, "羢"), (0xDB42, "羠"),
    (0xDB43, "羡"), (0xDB44, "翗"), (0xDB45, "聑"), (0xDB46, "聏"), (0xDB47, "聐"), (0xDB48, "胾"), (0xDB49, "胔"), (0xDB4A, "腃"),
    (0xDB4B, "腊"), (0xDB4C, "腒"), (0xDB4D, "腏"), (0xDB4E, "腇"), (0xDB4F, "脽"), (0xDB50, "腍"), (0xDB51, "脺"), (0xDB52, "臦"),
    (0xDB53, "臮"), (0xDB54, "臷"), (0xDB55, "臸"), (0xDB56, "臹"), (0xDB57, "舄"), (0xDB58, "舼"), (0xDB59, "舽"), (0xDB5A, "舿"),
    (0xDB5B, "艵"), (0xDB5C, "茻"), (0xDB5D, "菏"), (0xDB5E, "菹"), (0xDB5F, "萣"), (0xDB60, "菀"), (0xDB61, "菨"), (0xDB62, "萒"),
    (0xDB63, "菧"), (0xDB64, "菤"), (0xDB65, "菼"), (0xDB66, "菶"), (0xDB67, "萐"), (0xDB68, "菆"), (0xDB69, "菈"), (0xDB6A, "菫"),
    (0xDB6B, "菣"), (0xDB6C, "莿"), (0xDB6D, "萁"), (0xDB6E, "菝"), (0xDB6F, "菥"), (0xDB70, "菘"), (0xDB71, "菿"), (0xDB72, "菡"),
    (0xDB73, "菋"), (0xDB74, "菎"), (0xDB75, "菖"), (0xDB76, "菵"), (0xDB77, "菉"), (0xDB78, "萉"), (0xDB79, "萏"), (0xDB7A, "菞"),
    (0xDB7B, "萑"), (0xDB7C, "萆"), (0xDB7D, "菂"), (0xDB7E, "菳"), (0xDBA1, "菕"), (0xDBA2, "菺"), (0xDBA3, "菇"), (0xDBA4, "菑"),
    (0xDBA5, "菪"), (0xDBA6, "萓"), (0xDBA7, "菃"), (0xDBA8, "菬"), (0xDBA9, "菮"), (0xDBAA, "菄"), (0xDBAB, "菻"), (0xDBAC, "菗"),
    (0xDBAD, "菢"), (0xDBAE, "萛"), (0xDBAF, "菛"), (0xDBB0, "菾"), (0xDBB1, "蛘"), (0xDBB2, "蛢"), (0xDBB3, "蛦"), (0xDBB4, "蛓"),
    (0xDBB5, "蛣"), (0xDBB6, "蛚"), (0xDBB7, "蛪"), (0xDBB8, "蛝"), (0xDBB9, "蛫"), (0xDBBA, "蛜"), (0xDBBB, "蛬"), (0xDBBC, "蛩"),
    (0xDBBD, "蛗"), (0xDBBE, "蛨"), (0xDBBF, "蛑"), (0xDBC0, "衈"), (0xDBC1, "衖"), (0xDBC2, "衕"), (0xDBC3, "袺"), (0xDBC4, "裗"),
    (0xDBC5, "袹"), (0xDBC6, "袸"), (0xDBC7, "裀"), (0xDBC8, "袾"), (0xDBC9, "袶"), (0xDBCA, "袼"), (0xDBCB, "袷"), (0xDBCC, "袽"),
    (0xDBCD, "袲"), (0xDBCE, "褁"), (0xDBCF, "裉"), (0xDBD0, "覕"), (0xDBD1, "覘"), (0xDBD2, "覗"), (0xDBD3, "觝"), (0xDBD4, "觚"),
    (0xDBD5, "觛"), (0xDBD6, "詎"), (0xDBD7, "詍"), (0xDBD8, "訹"), (0xDBD9, "詙"), (0xDBDA, "詀"), (0xDBDB, "詗"), (0xDBDC, "詘"),
    (0xDBDD, "詄"), (0xDBDE, "詅"), (0xDBDF, "詒"), (0xDBE0, "詈"), (0xDBE1, "詑"), (0xDBE2, "詊"), (0xDBE3, "詌"), (0xDBE4, "詏"),
    (0xDBE5, "豟"), (0xDBE6, "貁"), (0xDBE7, "貀"), (0xDBE8, "貺"), (0xDBE9, "貾"), (0xDBEA, "貰"), (0xDBEB, "貹"), (0xDBEC, "貵"),
    (0xDBED, "趄"), (0xDBEE, "趀"), (0xDBEF, "趉"), (0xDBF0, "跘"), (0xDBF1, "跓"), (0xDBF2, "跍"), (0xDBF3, "跇"), (0xDBF4, "跖"),
    (0xDBF5, "跜"), (0xDBF6, "跏"), (0xDBF7, "跕"), (0xDBF8, "跙"), (0xDBF9, "跈"), (0xDBFA, "跗"), (0xDBFB, "跅"), (0xDBFC, "軯"),
    (0xDBFD, "軷"), (0xDBFE, "軺"), (0xDC40, "軹"), (0xDC41, "軦"), (0xDC42, "軮"), (0xDC43, "軥"), (0xDC44, "軵"), (0xDC45, "軧"),
    (0xDC46, "軨"), (0xDC47, "軶"), (0xDC48, "軫"), (0xDC49, "軱"), (0xDC4A, "軬"), (0xDC4B, "軴"), (0xDC4C, "軩"), (0xDC4D, "逭"),
    (0xDC4E, "逴"), (0xDC4F, "逯"), (0xDC50, "鄆"), (0xDC51, "鄬"), (0xDC52, "鄄"), (0xDC53, "郿"), (0xDC54, "郼"), (0xDC55, "鄈"),
    (0xDC56, "郹"), (0xDC57, "郻"), (0xDC58, "鄁"), (0xDC59, "鄀"), (0xDC5A, "鄇"), (0xDC5B, "鄅"), (0xDC5C, "鄃"), (0xDC5D, "酡"),
    (0xDC5E, "酤"), (0xDC5F, "酟"), (0xDC60, "酢"), (0xDC61, "酠"), (0xDC62, "鈁"), (0xDC63, "鈊"), (0xDC64, "鈥"), (0xDC65, "鈃"),
    (0xDC66, "鈚"), (0xDC67, "鈦"), (0xDC68, "鈏"), (0xDC69, "鈌"), (0xDC6A, "鈀"), (0xDC6B, "鈒"), (0xDC6C, "釿"), (0xDC6D, "釽"),
    (0xDC6E, "鈆"), (0xDC6F, "鈄"), (0xDC70, "鈧"), (0xDC71, "鈂"), (0xDC72, "鈜"), (0xDC73, "鈤"), (0xDC74, "鈙"), (0xDC75, "鈗"),
    (0xDC76, "鈅"), (0xDC77, "鈖"), (0xDC78, "镻"), (0xDC79, "閍"), (0xDC7A, "閌"), (0xDC7B, "閐"), (0xDC7C, "隇"), (0xDC7D, "陾"),
    (0xDC7E, "隈"), (0xDCA1, "隉"), (0xDCA2, "隃"), (0xDCA3, "隀"), (0xDCA4, "雂"), (0xDCA5, "雈"), (0xDCA6, "雃"), (0xDCA7, "雱"),
    (0xDCA8, "雰"), (0xDCA9, "靬"), (0xDCAA, "靰"), (0xDCAB, "靮"), (0xDCAC, "頇"), (0xDCAD, "颩"), (0xDCAE, "飫"), (0xDCAF, "鳦"),
    (0xDCB0, "黹"), (0xDCB1, "亃"), (0xDCB2, "亄"), (0xDCB3, "亶"), (0xDCB4, "傽"), (0xDCB5, "傿"), (0xDCB6, "僆"), (0xDCB7, "傮"),
    (0xDCB8, "僄"), (0xDCB9, "僊"), (0xDCBA, "傴"), (0xDCBB, "僈"), (0xDCBC, "僂"), (0xDCBD, "傰"), (0xDCBE, "僁"), (0xDCBF, "傺"),
    (0xDCC0, "傱"), (0xDCC1, "僋"), (0xDCC2, "僉"), (0xDCC3, "傶"), (0xDCC4, "傸"), (0xDCC5, "凗"), (0xDCC6, "剺"), (0xDCC7, "剸"),
    (0xDCC8, "剻"), (0xDCC9, "剼"), (0xDCCA, "嗃"), (0xDCCB, "嗛"), (0xDCCC, "嗌"), (0xDCCD, "嗐"), (0xDCCE, "嗋"), (0xDCCF, "嗊"),
    (0xDCD0, "嗝"), (0xDCD1, "嗀"), (0xDCD2, "嗔"), (0xDCD3, "嗄"), (0xDCD4, "嗩"), (0xDCD5, "喿"), (0xDCD6, "嗒"), (0xDCD7, "喍"),
    (0xDCD8, "嗏"), (0xDCD9, "嗕"), (0xDCDA, "嗢"), (0xDCDB, "嗖"), (0xDCDC, "嗈"), (0xDCDD, "嗲"), (0xDCDE, "嗍"), (0xDCDF, "嗙"),
    (0xDCE0, "嗂"), (0xDCE1, "圔"), (0xDCE2, "塓"), (0xDCE3, "塨"), (0xDCE4, "塤"), (0xDCE5, "塏"), (0xDCE6, "塍"), (0xDCE7, "塉"),
    (0xDCE8, "塯"), (0xDCE9, "塕"), (0xDCEA, "塎"), (0xDCEB, "塝"), (0xDCEC, "塙"), (0xDCED, "塥"), (0xDCEE, "塛"), (0xDCEF, "堽"),
    (0xDCF0, "塣"), (0xDCF1, "塱"), (0xDCF2, "壼"), (0xDCF3, "嫇"), (0xDCF4, "嫄"), (0xDCF5, "嫋"), (0xDCF6, "媺"), (0xDCF7, "媸"),
    (0xDCF8, "媱"), (0xDCF9, "媵"), (0xDCFA, "媰"), (0xDCFB, "媿"), (0xDCFC, "嫈"), (0xDCFD, "媻"), (0xDCFE, "嫆"), (0xDD40, "媷"),
    (0xDD41, "嫀"), (0xDD42, "嫊"), (0xDD43, "媴"), (0xDD44, "媶"), (0xDD45, "嫍"), (0xDD46, "媹"), (0xDD47, "媐"), (0xDD48, "寖"),
    (0xDD49, "寘"), (0xDD4A, "寙"), (0xDD4B, "尟"), (0xDD4C, "尳"), (0xDD4D, "嵱"), (0xDD4E, "嵣"), (0xDD4F, "嵊"), (0xDD50, "嵥"),
    (0xDD51, "嵲"), (0xDD52, "嵬"), (0xDD53, "嵞"), (0xDD54, "嵨"), (0xDD55, "嵧"), (0xDD56, "嵢"), (0xDD57, "巰"), (0xDD58, "幏"),
    (0xDD59, "幎"), (0xDD5A, "幊"), (0xDD5B, "幍"), (0xDD5C, "幋"), (0xDD5D, "廅"), (0xDD5E, "廌"), (0xDD5F, "廆"), (0xDD60, "廋"),
    (0xDD61, "廇"), (0xDD62, "彀"), (0xDD63, "徯"), (0xDD64, "徭"), (0xDD65, "惷"), (0xDD66, "慉"), (0xDD67, "慊"), (0xDD68, "愫"),
    (0xDD69, "慅"), (0xDD6A, "愶"), (0xDD6B, "愲"), (0xDD6C, "愮"), (0xDD6D, "慆"), (0xDD6E, "愯"), (0xDD6F, "慏"), (0xDD70, "愩"),
    (0xDD71, "慀"), (0xDD72, "戠"), (0xDD73, "酨"), (0xDD74, "戣"), (0xDD75, "戥"), (0xDD76, "戤"), (0xDD77, "揅"), (0xDD78, "揱"),
    (0xDD79, "揫"), (0xDD7A, "搐"), (0xDD7B, "搒"), (0xDD7C, "搉"), (0xDD7D, "搠"), (0xDD7E, "搤"), (0xDDA1, "搳"), (0xDDA2, "摃"),
    (0xDDA3, "搟"), (0xDDA4, "搕"), (0xDDA5, "搘"), (0xDDA6, "搹"), (0xDDA7, "搷"), (0xDDA8, "搢"), (0xDDA9, "搣"), (0xDDAA, "搌"),
    (0xDDAB, "搦"), (0xDDAC, "搰"), (0xDDAD, "搨"), (0xDDAE, "摁"), (0xDDAF, "搵"), (0xDDB0, "搯"), (0xDDB1, "搊"), (0xDDB2, "搚"),
    (0xDDB3, "摀"), (0xDDB4, "搥"), (0xDDB5, "搧"), (0xDDB6, "搋"), (0xDDB7, "揧"), (0xDDB8, "搛"), (0xDDB9, "搮"), (0xDDBA, "搡"),
    (0xDDBB, "搎"), (0xDDBC, "敯"), (0xDDBD, "斒"), (0xDDBE, "旓"), (0xDDBF, "暆"), (0xDDC0, "暌"), (0xDDC1, "暕"), (0xDDC2, "暐"),
    (0xDDC3, "暋"), (0xDDC4, "暊"), (0xDDC5, "暙"), (0xDDC6, "暔"), (0xDDC7, "晸"), (0xDDC8, "朠"), (0xDDC9, "楦"), (0xDDCA, "楟"),
    (0xDDCB, "椸"), (0xDDCC, "楎"), (0xDDCD, "楢"), (0xDDCE, "楱"), (0xDDCF, "椿"), (0xDDD0, "楅"), (0xDDD1, "楪"), (0xDDD2, "椹"),
    (0xDDD3, "楂"), (0xDDD4, "楗"), (0xDDD5, "楙"), (0xDDD6, "楺"), (0xDDD7, "楈"), (0xDDD8, "楉"), (0xDDD9, "椵"), (0xDDDA, "楬"),
    (0xDDDB, "椳"), (0xDDDC, "椽"), (0xDDDD, "楥"), (0xDDDE, "棰"), (0xDDDF, "楸"), (0xDDE0, "椴"), (0xDDE1, "楩"), (0xDDE2, "楀"),
    (0xDDE3, "楯"), (0xDDE4, "楄"), (0xDDE5, "楶"), (0xDDE6, "楘"), (0xDDE7, "楁"), (0xDDE8, "楴"), (0xDDE9, "楌"), (0xDDEA, "椻"),
    (0xDDEB, "楋"), (0xDDEC, "椷"), (0xDDED, "楜"), (0xDDEE, "楏"), (0xDDEF, "楑"), (0xDDF0, "椲"), (0xDDF1, "楒"), (0xDDF2, "椯"),
    (0xDDF3, "楻"), (0xDDF4, "椼"), (0xDDF5, "歆"), (0xDDF6, "歅"), (0xDDF7, "歃"), (0xDDF8, "歂"), (0xDDF9, "歈"), (0xDDFA, "歁"),
    (0xDDFB, "殛"), (0xDDFC, "嗀"), (0xDDFD, "毻"), (0xDDFE, "毼"), (0xDE40, "毹"), (0xDE41, "毷"), (0xDE42, "毸"), (0xDE43, "溛"),
    (0xDE44, "滖"), (0xDE45, "滈"), (0xDE46, "溏"), (0xDE47, "滀"), (0xDE48, "溟"), (0xDE49, "溓"), (0xDE4A, "溔"), (0xDE4B, "溠"),
    (0xDE4C, "溱"), (0xDE4D, "溹"), (0xDE4E, "滆"), (0xDE4F, "滒"), (0xDE50, "溽"), (0xDE51, "滁"), (0xDE52, "溞"), (0xDE53, "滉"),
    (0xDE54, "溷"), (0xDE55, "溰"), (0xDE56, "滍"), (0xDE57, "溦"), (0xDE58, "滏"), (0xDE59, "溲"), (0xDE5A, "溾"), (0xDE5B, "滃"),
    (0xDE5C, "滜"), (0xDE5D, "滘"), (0xDE5E, "溙"), (0xDE5F, "溒"), (0xDE60, "溎"), (0xDE61, "溍"), (0xDE62, "溤"), (0xDE63, "溡"),
    (0xDE64, "溿"), (0xDE65, "溳"), (0xDE66, "滐"), (0xDE67, "滊"), (0xDE68, "溗"), (0xDE69, "溮"), (0xDE6A, "溣"), (0xDE6B, "煇"),
    (0xDE6C, "煔"), (0xDE6D, "煒"), (0xDE6E, "煣"), (0xDE6F, "煠"), (0xDE70, "煁"), (0xDE71, "煝"), (0xDE72, "煢"), (0xDE73, "煲"),
    (0xDE74, "煸"), (0xDE75, "煪"), (0xDE76, "煡"), (0xDE77, "煂"), (0xDE78, "煘"), (0xDE79, "煃"), (0xDE7A, "煋"), (0xDE7B, "煰"),
    (0xDE7C, "煟"), (0xDE7D, "煐"), (0xDE7E, "煓"), (0xDEA1, "煄"), (0xDEA2, "煍"), (0xDEA3, "煚"), (0xDEA4, "牏"), (0xDEA5, "犍"),
    (0xDEA6, "犌"), (0xDEA7, "犑"), (0xDEA8, "犐"), (0xDEA9, "犎"), (0xDEAA, "猼"), (0xDEAB, "獂"), (0xDEAC, "猻"), (0xDEAD, "猺"),
    (0xDEAE, "獀"), (0xDEAF, "獊"), (0xDEB0, "獉"), (0xDEB1, "瑄"), (0xDEB2, "瑊"), (0xDEB3, "瑋"), (0xDEB4, "瑒"), (0xDEB5, "瑑"),
    (0xDEB6, "瑗"), (0xDEB7, "瑀"), (0xDEB8, "瑏"), (0xDEB9, "瑐"), (0xDEBA, "瑎"), (0xDEBB, "瑂"), (0xDEBC, "瑆"), (0xDEBD, "瑍"),
    (0xDEBE, "瑔"), (0xDEBF, "瓡"), (0xDEC0, "瓿"), (0xDEC1, "瓾"), (0xDEC2, "瓽"), (0xDEC3, "甝"), (0xDEC4, "畹"), (0xDEC5, "畷"),
    (0xDEC6, "榃"), (0xDEC7, "痯"), (0xDEC8, "瘏"), (0xDEC9, "瘃"), (0xDECA, "痷"), (0xDECB, "痾"), (0xDECC, "痼"), (0xDECD, "痹"),
    (0xDECE, "痸"), (0xDECF, "瘐"), (0xDED0, "痻"), (0xDED1, "痶"), (0xDED2, "痭"), (0xDED3, "痵"), (0xDED4, "痽"), (0xDED5, "皙"),
    (0xDED6, "皵"), (0xDED7, "盝"), (0xDED8, "睕"), (0xDED9, "睟"), (0xDEDA, "睠"), (0xDEDB, "睒"), (0xDEDC, "睖"), (0xDEDD, "睚"),
    (0xDEDE, "睩"), (0xDEDF, "睧"), (0xDEE0, "睔"), (0xDEE1, "睙"), (0xDEE2, "睭"), (0xDEE3, "矠"), (0xDEE4, "碇"), (0xDEE5, "碚"),
    (0xDEE6, "碔"), (0xDEE7, "碏"), (0xDEE8, "碄"), (0xDEE9, "碕"), (0xDEEA, "碅"), (0xDEEB, "碆"), (0xDEEC, "碡"), (0xDEED, "碃"),
    (0xDEEE, "硹"), (0xDEEF, "碙"), (0xDEF0, "碀"), (0xDEF1, "碖"), (0xDEF2, "硻"), (0xDEF3, "祼"), (0xDEF4, "禂"), (0xDEF5, "祽"),
    (0xDEF6, "祹"), (0xDEF7, "稑"), (0xDEF8, "稘"), (0xDEF9, "稙"), (0xDEFA, "稒"), (0xDEFB, "稗"), (0xDEFC, "稕"), (0xDEFD, "稢"),
    (0xDEFE, "稓"), (0xDF40, "稛"), (0xDF41, "稐"), (0xDF42, "窣"), (0xDF43, "窢"), (0xDF44, "窞"), (0xDF45, "竫"), (0xDF46, "筦"),
    (0xDF47, "筤"), (0xDF48, "筭"), (0xDF49, "筴"), (0xDF4A, "筩"), (0xDF4B, "筲"), (0xDF4C, "筥"), (0xDF4D, "筳"), (0xDF4E, "筱"),
    (0xDF4F, "筰"), (0xDF50, "筡"), (0xDF51, "筸"), (0xDF52, "筶"), (0xDF53, "筣"), (0xDF54, "粲"), (0xDF55, "粴"), (0xDF56, "粯"),
    (0xDF57, "綈"), (0xDF58, "綆"), (0xDF59, "綀"), (0xDF5A, "綍"), (0xDF5B, "絿"), (0xDF5C, "綅"), (0xDF5D, "絺"), (0xDF5E, "綎"),
    (0xDF5F, "絻"), (0xDF60, "綃"), (0xDF61, "絼"), (0xDF62, "綌"), (0xDF63, "綔"), (0xDF64, "綄"), (0xDF65, "絽"), (0xDF66, "綒"),
    (0xDF67, "罭"), (0xDF68, "罫"), (0xDF69, "罧"), (0xDF6A, "罨"), (0xDF6B, "罬"), (0xDF6C, "羦"), (0xDF6D, "羥"), (0xDF6E, "羧"),
    (0xDF6F, "翛"), (0xDF70, "翜"), (0xDF71, "耡"), (0xDF72, "腤"), (0xDF73, "腠"), (0xDF74, "腷"), (0xDF75, "腜"), (0xDF76, "腩"),
    (0xDF77, "腛"), (0xDF78, "腢"), (0xDF79, "腲"), (0xDF7A, "朡"), (0xDF7B, "腞"), (0xDF7C, "腶"), (0xDF7D, "腧"), (0xDF7E, "腯"),
    (0xDFA1, "腄"), (0xDFA2, "腡"), (0xDFA3, "舝"), (0xDFA4, "艉"), (0xDFA5, "艄"), (0xDFA6, "艀"), (0xDFA7, "艂"), (0xDFA8, "艅"),
    (0xDFA9, "蓱"), (0xDFAA, "萿"), (0xDFAB, "葖"), (0xDFAC, "葶"), (0xDFAD, "葹"), (0xDFAE, "蒏"), (0xDFAF, "蒍"), (0xDFB0, "葥"),
    (0xDFB1, "葑"), (0xDFB2, "葀"), (0xDFB3, "蒆"), (0xDFB4, "葧"), (0xDFB5, "萰"), (0xDFB6, "葍"), (0xDFB7, "葽"), (0xDFB8, "葚"),
    (0xDFB9, "葙"), (0xDFBA, "葴"), (0xDFBB, "葳"), (0xDFBC, "葝"), (0xDFBD, "蔇"), (0xDFBE, "葞"), (0xDFBF, "萷"), (0xDFC0, "萺"),
    (0xDFC1, "萴"), (0xDFC2, "葺"), (0xDFC3, "葃"), (0xDFC4, "葸"), (0xDFC5, "萲"), (0xDFC6, "葅"), (0xDFC7, "萩"), (0xDFC8, "菙"),
    (0xDFC9, "葋"), (0xDFCA, "萯"), (0xDFCB, "葂"), (0xDFCC, "萭"), (0xDFCD, "葟"), (0xDFCE, "葰"), (0xDFCF, "萹"), (0xDFD0, "葎"),
    (0xDFD1, "葌"), (0xDFD2, "葒"), (0xDFD3, "葯"), (0xDFD4, "蓅"), (0xDFD5, "蒎"), (0xDFD6, "萻"), (0xDFD7, "葇"), (0xDFD8, "萶"),
    (0xDFD9, "萳"), (0xDFDA, "葨"), (0xDFDB, "葾"), (0xDFDC, "葄"), (0xDFDD, "萫"), (0xDFDE, "葠"), (0xDFDF, "葔"), (0xDFE0, "葮"),
    (0xDFE1, "葐"), (0xDFE2, "蜋"), (0xDFE3, "蜄"), (0xDFE4, "蛷"), (0xDFE5, "蜌"), (0xDFE6, "蛺"), (0xDFE7, "蛖"), (0xDFE8, "蛵"),
    (0xDFE9, "蝍"), (0xDFEA, "蛸"), (0xDFEB, "蜎"), (0xDFEC, "蜉"), (0xDFED, "蜁"), (0xDFEE, "蛶"), (0xDFEF, "蜍"), (0xDFF0, "蜅"),
    (0xDFF1, "裖"), (0xDFF2, "裋"), (0xDFF3, "裍"), (0xDFF4, "裎"), (0xDFF5, "裞"), (0xDFF6, "裛"), (0xDFF7, "裚"), (0xDFF8, "裌"),
    (0xDFF9, "裐"), (0xDFFA, "覅"), (0xDFFB, "覛"), (0xDFFC, "觟"), (0xDFFD, "觥"), (0xDFFE, "觤"), (0xE040, "觡"), (0xE041, "觠"),
    (0xE042, "觢"), (0xE043, "觜"), (0xE044, "触"), (0xE045, "詶"), (0xE046, "誆"), (0xE047, "詿"), (0xE048, "詡"), (0xE049, "訿"),
    (0xE04A, "詷"), (0xE04B, "誂"), (0xE04C, "誄"), (0xE04D, "詵"), (0xE04E, "誃"), (0xE04F, "誁"), (0xE050, "詴"), (0xE051, "詺"),
    (0xE052, "谼"), (0xE053, "豋"), (0xE054, "豊"), (0xE055, "豥"), (0xE056, "豤"), (0xE057, "豦"), (0xE058, "貆"), (0xE059, "貄"),
    (0xE05A, "貅"), (0xE05B, "賌"), (0xE05C, "赨"), (0xE05D, "赩"), (0xE05E, "趑"), (0xE05F, "趌"), (0xE060, "趎"), (0xE061, "趏"),
    (0xE062, "趍"), (0xE063, "趓"), (0xE064, "趔"), (0xE065, "趐"), (0xE066, "趒"), (0xE067, "跰"), (0xE068, "跠"), (0xE069, "跬"),
    (0xE06A, "跱"), (0xE06B, "跮"), (0xE06C, "跐"), (0xE06D, "跩"), (0xE06E, "跣"), (0xE06F, "跢"), (0xE070, "跧"), (0xE071, "跲"),
    (0xE072, "跫"), (0xE073, "跴"), (0xE074, "輆"), (0xE075, "軿"), (0xE076, "輁"), (0xE077, "輀"), (0xE078, "輅"), (0xE079, "輇"),
    (0xE07A, "輈"), (0xE07B, "輂"), (0xE07C, "輋"), (0xE07D, "遒"), (0xE07E, "逿"), (0xE0A1, "遄"), (0xE0A2, "遉"), (0xE0A3, "逽"),
    (0xE0A4, "鄐"), (0xE0A5, "鄍"), (0xE0A6, "鄏"), (0xE0A7, "鄑"), (0xE0A8, "鄖"), (0xE0A9, "鄔"), (0xE0AA, "鄋"), (0xE0AB, "鄎"),
    (0xE0AC, "酮"), (0xE0AD, "酯"), (0xE0AE, "鉈"), (0xE0AF, "鉒"), (0xE0B0, "鈰"), (0xE0B1, "鈺"), (0xE0B2, "鉦"), (0xE0B3, "鈳"),
    (0xE0B4, "鉥"), (0xE0B5, "鉞"), (0xE0B6, "銃"), (0xE0B7, "鈮"), (0xE0B8, "鉊"), (0xE0B9, "鉆"), (0xE0BA, "鉭"), (0xE0BB, "鉬"),
    (0xE0BC, "鉏"), (0xE0BD, "鉠"), (0xE0BE, "鉧"), (0xE0BF, "鉯"), (0xE0C0, "鈶"), (0xE0C1, "鉡"), (0xE0C2, "鉰"), (0xE0C3, "鈱"),
    (0xE0C4, "鉔"), (0xE0C5, "鉣"), (0xE0C6, "鉐"), (0xE0C7, "鉲"), (0xE0C8, "鉎"), (0xE0C9, "鉓"), (0xE0CA, "鉌"), (0xE0CB, "鉖"),
    (0xE0CC, "鈲"), (0xE0CD, "閟"), (0xE0CE, "閜"), (0xE0CF, "閞"), (0xE0D0, "閛"), (0xE0D1, "隒"), (0xE0D2, "隓"), (0xE0D3, "隑"),
    (0xE0D4, "隗"), (0xE0D5, "雎"), (0xE0D6, "雺"), (0xE0D7, "雽"), (0xE0D8, "雸"), (0xE0D9, "雵"), (0xE0DA, "靳"), (0xE0DB, "靷"),
    (0xE0DC, "靸"), (0xE0DD, "靲"), (0xE0DE, "頏"), (0xE0DF, "頍"), (0xE0E0, "頎"), (0xE0E1, "颬"), (0xE0E2, "飶"), (0xE0E3, "飹"),
    (0xE0E4, "馯"), (0xE0E5, "馲"), (0xE0E6, "馰"), (0xE0E7, "馵"), (0xE0E8, "骭"), (0xE0E9, "骫"), (0xE0EA, "魛"), (0xE0EB, "鳪"),
    (0xE0EC, "鳭"), (0xE0ED, "鳧"), (0xE0EE, "麀"), (0xE0EF, "黽"), (0xE0F0, "僦"), (0xE0F1, "僔"), (0xE0F2, "僗"), (0xE0F3, "僨"),
    (0xE0F4, "僳"), (0xE0F5, "僛"), (0xE0F6, "僪"), (0xE0F7, "僝"), (0xE0F8, "僤"), (0xE0F9, "僓"), (0xE0FA, "僬"), (0xE0FB, "僰"),
    (0xE0FC, "僯"), (0xE0FD, "僣"), (0xE0FE, "僠"), (0xE140, "凘"), (0xE141, "劀"), (0xE142, "劁"), (0xE143, "勩"), (0xE144, "勫"),
    (0xE145, "匰"), (0xE146, "厬"), (0xE147, "嘧"), (0xE148, "嘕"), (0xE149, "嘌"), (0xE14A, "嘒"), (0xE14B, "嗼"), (0xE14C, "嘏"),
    (0xE14D, "嘜"), (0xE14E, "嘁"), (0xE14F, "嘓"), (0xE150, "嘂"), (0xE151, "嗺"), (0xE152, "嘝"), (0xE153, "嘄"), (0xE154, "嗿"),
    (0xE155, "嗹"), (0xE156, "墉"), (0xE157, "塼"), (0xE158, "墐"), (0xE159, "墘"), (0xE15A, "墆"), (0xE15B, "墁"), (0xE15C, "塿"),
    (0xE15D, "塴"), (0xE15E, "墋"), (0xE15F, "塺"), (0xE160, "墇"), (0xE161, "墑"), (0xE162, "墎"), (0xE163, "塶"), (0xE164, "墂"),
    (0xE165, "墈"), (0xE166, "塻"), (0xE167, "墔"), (0xE168, "墏"), (0xE169, "壾"), (0xE16A, "奫"), (0xE16B, "嫜"), (0xE16C, "嫮"),
    (0xE16D, "嫥"), (0xE16E, "嫕"), (0xE16F, "嫪"), (0xE170, "嫚"), (0xE171, "嫭"), (0xE172, "嫫"), (0xE173, "嫳"), (0xE174, "嫢"),
    (0xE175, "嫠"), (0xE176, "嫛"), (0xE177, "嫬"), (0xE178, "嫞"), (0xE179, "嫝"), (0xE17A, "嫙"), (0xE17B, "嫨"), (0xE17C, "嫟"),
    (0xE17D, "孷"), (0xE17E, "寠"), (0xE1A1, "寣"), (0xE1A2, "屣"), (0xE1A3, "嶂"), (0xE1A4, "嶀"), (0xE1A5, "嵽"), (0xE1A6, "嶆"),
    (0xE1A7, "嵺"), (0xE1A8, "嶁"), (0xE1A9, "嵷"), (0xE1AA, "嶊"), (0xE1AB, "嶉"), (0xE1AC, "嶈"), (0xE1AD, "嵾"), (0xE1AE, "嵼"),
    (0xE1AF, "嶍"), (0xE1B0, "嵹"), (0xE1B1, "嵿"), (0xE1B2, "幘"), (0xE1B3, "幙"), (0xE1B4, "幓"), (0xE1B5, "廘"), (0xE1B6, "廑"),
    (0xE1B7, "廗"), (0xE1B8, "廎"), (0xE1B9, "廜"), (0xE1BA, "廕"), (0xE1BB, "廙"), (0xE1BC, "廒"), (0xE1BD, "廔"), (0xE1BE, "彄"),
    (0xE1BF, "彃"), (0xE1C0, "彯"), (0xE1C1, "徶"), (0xE1C2, "愬"), (0xE1C3, "愨"), (0xE1C4, "慁"), (0xE1C5, "慞"), (0xE1C6, "慱"),
    (0xE1C7, "慳"), (0xE1C8, "慒"), (0xE1C9, "慓"), (0xE1CA, "慲"), (0xE1CB, "慬"), (0xE1CC, "憀"), (0xE1CD, "慴"), (0xE1CE, "慔"),
    (0xE1CF, "慺"), (0xE1D0, "慛"), (0xE1D1, "慥"), (0xE1D2, "愻"), (0xE1D3, "慪"), (0xE1D4, "慡"), (0xE1D5, "慖"), (0xE1D6, "戩"),
    (0xE1D7, "戧"), (0xE1D8, "戫"), (0xE1D9, "搫"), (0xE1DA, "摍"), (0xE1DB, "摛"), (0xE1DC, "摝"), (0xE1DD, "摴"), (0xE1DE, "摶"),
    (0xE1DF, "摲"), (0xE1E0, "摳"), (0xE1E1, "摽"), (0xE1E2, "摵"), (0xE1E3, "摦"), (0xE1E4, "撦"), (0xE1E5, "摎"), (0xE1E6, "撂"),
    (0xE1E7, "摞"), (0xE1E8, "摜"), (0xE1E9, "摋"), (0xE1EA, "摓"), (0xE1EB, "摠"), (0xE1EC, "摐"), (0xE1ED, "摿"), (0xE1EE, "搿"),
    (0xE1EF, "摬"), (0xE1F0, "摫"), (0xE1F1, "摙"), (0xE1F2, "摥"), (0xE1F3, "摷"), (0xE1F4, "敳"), (0xE1F5, "斠"), (0xE1F6, "暡"),
    (0xE1F7, "暠"), (0xE1F8, "暟"), (0xE1F9, "朅"), (0xE1FA, "朄"), (0xE1FB, "朢"), (0xE1FC, "榱"), (0xE1FD, "榶"), (0xE1FE, "槉"),
    (0xE240, "榠"), (0xE241, "槎"), (0xE242, "榖"), (0xE243, "榰"), (0xE244, "榬"), (0xE245, "榼"), (0xE246, "榑"), (0xE247, "榙"),
    (0xE248, "榎"), (0xE249, "榧"), (0xE24A, "榍"), (0xE24B, "榩"), (0xE24C, "榾"), (0xE24D, "榯"), (0xE24E, "榿"), (0xE24F, "槄"),
    (0xE250, "榽"), (0xE251, "榤"), (0xE252, "槔"), (0xE253, "榹"), (0xE254, "槊"), (0xE255, "榚"), (0xE256, "槏"), (0xE257, "榳"),
    (0xE258, "榓"), (0xE259, "榪"), (0xE25A, "榡"), (0xE25B, "榞"), (0xE25C, "槙"), (0xE25D, "榗"), (0xE25E, "榐"), (0xE25F, "槂"),
    (0xE260, "榵"), (0xE261, "榥"), (0xE262, "槆"), (0xE263, "歊"), (0xE264, "歍"), (0xE265, "歋"), (0xE266, "殞"), (0xE267, "殟"),
    (0xE268, "殠"), (0xE269, "毃"), (0xE26A, "毄"), (0xE26B, "毾"), (0xE26C, "滎"), (0xE26D, "滵"), (0xE26E, "滱"), (0xE26F, "漃"),
    (0xE270, "漥"), (0xE271, "滸"), (0xE272, "漷"), (0xE273, "滻"), (0xE274, "漮"), (0xE275, "漉"), (0xE276, "潎"), (0xE277, "漙"),
    (0xE278, "漚"), (0xE279, "漧"), (0xE27A, "漘"), (0xE27B, "漻"), (0xE27C, "漒"), (0xE27D, "滭"), (0xE27E, "漊"), (0xE2A1, "漶"),
    (0xE2A2, "潳"), (0xE2A3, "滹"), (0xE2A4, "滮"), (0xE2A5, "漭"), (0xE2A6, "潀"), (0xE2A7, "漰"), (0xE2A8, "漼"), (0xE2A9, "漵"),
    (0xE2AA, "滫"), (0xE2AB, "漇"), (0xE2AC, "漎"), (0xE2AD, "潃"), (0xE2AE, "漅"), (0xE2AF, "滽"), (0xE2B0, "滶"), (0xE2B1, "漹"),
    (0xE2B2, "漜"), (0xE2B3, "滼"), (0xE2B4, "漺"), (0xE2B5, "漟"), (0xE2B6, "漍"), (0xE2B7, "漞"), (0xE2B8, "漈"), (0xE2B9, "漡"),
    (0xE2BA, "熇"), (0xE2BB, "熐"), (0xE2BC, "熉"), (0xE2BD, "熀"), (0xE2BE, "熅"), (0xE2BF, "熂"), (0xE2C0, "熏"), (0xE2C1, "煻"),
    (0xE2C2, "熆"), (0xE2C3, "熁"), (0xE2C4, "熗"), (0xE2C5, "牄"), (0xE2C6, "牓"), (0xE2C7, "犗"), (0xE2C8, "犕"), (0xE2C9, "犓"),
    (0xE2CA, "獃"), (0xE2CB, "獍"), (0xE2CC, "獑"), (0xE2CD, "獌"), (0xE2CE, "瑢"), (0xE2CF, "瑳"), (0xE2D0, "瑱"), (0xE2D1, "瑵"),
    (0xE2D2, "瑲"), (0xE2D3, "瑧"), (0xE2D4, "瑮"), (0xE2D5, "甀"), (0xE2D6, "甂"), (0xE2D7, "甃"), (0xE2D8, "畽"), (0xE2D9, "疐"),
    (0xE2DA, "瘖"), (0xE2DB, "瘈"), (0xE2DC, "瘌"), (0xE2DD, "瘕"), (0xE2DE, "瘑"), (0xE2DF, "瘊"), (0xE2E0, "瘔"), (0xE2E1, "皸"),
    (0xE2E2, "瞁"), (0xE2E3, "睼"), (0xE2E4, "瞅"), (0xE2E5, "瞂"), (0xE2E6, "睮"), (0xE2E7, "瞀"), (0xE2E8, "睯"), (0xE2E9, "睾"),
    (0xE2EA, "瞃"), (0xE2EB, "碲"), (0xE2EC, "碪"), (0xE2ED, "碴"), (0xE2EE, "碭"), (0xE2EF, "碨"), (0xE2F0, "硾"), (0xE2F1, "碫"),
    (0xE2F2, "碞"), (0xE2F3, "碥"), (0xE2F4, "碠"), (0xE2F5, "碬"), (0xE2F6, "碢"), (0xE2F7, "碤"), (0xE2F8, "禘"), (0xE2F9, "禊"),
    (0xE2FA, "禋"), (0xE2FB, "禖"), (0xE2FC, "禕"), (0xE2FD, "禔"), (0xE2FE, "禓"), (0xE340, "禗"), (0xE341, "禈"), (0xE342, "禒"),
    (0xE343, "禐"), (0xE344, "稫"), (0xE345, "穊"), (0xE346, "稰"), (0xE347, "稯"), (0xE348, "稨"), (0xE349, "稦"), (0xE34A, "窨"),
    (0xE34B, "窫"), (0xE34C, "窬"), (0xE34D, "竮"), (0xE34E, "箈"), (0xE34F, "箜"), (0xE350, "箊"), (0xE351, "箑"), (0xE352, "箐"),
    (0xE353, "箖"), (0xE354, "箍"), (0xE355, "箌"), (0xE356, "箛"), (0xE357, "箎"), (0xE358, "箅"), (0xE359, "箘"), (0xE35A, "劄"),
    (0xE35B, "箙"), (0xE35C, "箤"), (0xE35D, "箂"), (0xE35E, "粻"), (0xE35F, "粿"), (0xE360, "粼"), (0xE361, "粺"), (0xE362, "綧"),
    (0xE363, "綷"), (0xE364, "緂"), (0xE365, "綣"), (0xE366, "綪"), (0xE367, "緁"), (0xE368, "緀"), (0xE369, "緅"), (0xE36A, "綝"),
    (0xE36B, "緎"), (0xE36C, "緄"), (0xE36D, "緆"), (0xE36E, "緋"), (0xE36F, "緌"), (0xE370, "綯"), (0xE371, "綹"), (0xE372, "綖"),
    (0xE373, "綼"), (0xE374, "綟"), (0xE375, "綦"), (0xE376, "綮"), (0xE377, "綩"), (0xE378, "綡"), (0xE379, "緉"), (0xE37A, "罳"),
    (0xE37B, "翢"), (0xE37C, "翣"), (0xE37D, "翥"), (0xE37E, "翞"), (0xE3A1, "耤"), (0xE3A2, "聝"), (0xE3A3, "聜"), (0xE3A4, "膉"),
    (0xE3A5, "膆"), (0xE3A6, "膃"), (0xE3A7, "膇"), (0xE3A8, "膍"), (0xE3A9, "膌"), (0xE3AA, "膋"), (0xE3AB, "舕"), (0xE3AC, "蒗"),
    (0xE3AD, "蒤"), (0xE3AE, "蒡"), (0xE3AF, "蒟"), (0xE3B0, "蒺"), (0xE3B1, "蓎"), (0xE3B2, "蓂"), (0xE3B3, "蒬"), (0xE3B4, "蒮"),
    (0xE3B5, "蒫"), (0xE3B6, "蒹"), (0xE3B7, "蒴"), (0xE3B8, "蓁"), (0xE3B9, "蓍"), (0xE3BA, "蒪"), (0xE3BB, "蒚"), (0xE3BC, "蒱"),
    (0xE3BD, "蓐"), (0xE3BE, "蒝"), (0xE3BF, "蒧"), (0xE3C0, "蒻"), (0xE3C1, "蒢"), (0xE3C2, "蒔"), (0xE3C3, "蓇"), (0xE3C4, "蓌"),
    (0xE3C5, "蒛"), (0xE3C6, "蒩"), (0xE3C7, "蒯"), (0xE3C8, "蒨"), (0xE3C9, "蓖"), (0xE3CA, "蒘"), (0xE3CB, "蒶"), (0xE3CC, "蓏"),
    (0xE3CD, "蒠"), (0xE3CE, "蓗"), (0xE3CF, "蓔"), (0xE3D0, "蓒"), (0xE3D1, "蓛"), (0xE3D2, "蒰"), (0xE3D3, "蒑"), (0xE3D4, "虡"),
    (0xE3D5, "蜳"), (0xE3D6, "蜣"), (0xE3D7, "蜨"), (0xE3D8, "蝫"), (0xE3D9, "蝀"), (0xE3DA, "蜮"), (0xE3DB, "蜞"), (0xE3DC, "蜡"),
    (0xE3DD, "蜙"), (0xE3DE, "蜛"), (0xE3DF, "蝃"), (0xE3E0, "蜬"), (0xE3E1, "蝁"), (0xE3E2, "蜾"), (0xE3E3, "蝆"), (0xE3E4, "蜠"),
    (0xE3E5, "蜲"), (0xE3E6, "蜪"), (0xE3E7, "蜭"), (0xE3E8, "蜼"), (0xE3E9, "蜒"), (0xE3EA, "蜺"), (0xE3EB, "蜱"), (0xE3EC, "蜵"),
    (0xE3ED, "蝂"), (0xE3EE, "蜦"), (0xE3EF, "蜧"), (0xE3F0, "蜸"), (0xE3F1, "蜤"), (0xE3F2, "蜚"), (0xE3F3, "蜰"), (0xE3F4, "蜑"),
    (0xE3F5, "裷"), (0xE3F6, "裧"), (0xE3F7, "裱"), (0xE3F8, "裲"), (0xE3F9, "裺"), (0xE3FA, "裾"), (0xE3FB, "裮"), (0xE3FC, "裼"),
    (0xE3FD, "裶"), (0xE3FE, "裻"), (0xE440, "裰"), (0xE441, "裬"), (0xE442, "裫"), (0xE443, "覝"), (0xE444, "覡"), (0xE445, "覟"),
    (0xE446, "覞"), (0xE447, "觩"), (0xE448, "觫"), (0xE449, "觨"), (0xE44A, "誫"), (0xE44B, "誙"), (0xE44C, "誋"), (0xE44D, "誒"),
    (0xE44E, "誏"), (0xE44F, "誖"), (0xE450, "谽"), (0xE451, "豨"), (0xE452, "豩"), (0xE453, "賕"), (0xE454, "賏"), (0xE455, "賗"),
    (0xE456, "趖"), (0xE457, "踉"), (0xE458, "踂"), (0xE459, "跿"), (0xE45A, "踍"), (0xE45B, "跽"), (0xE45C, "踊"), (0xE45D, "踃"),
    (0xE45E, "踇"), (0xE45F, "踆"), (0xE460, "踅"), (0xE461, "跾"), (0xE462, "踀"), (0xE463, "踄"), (0xE464, "輐"), (0xE465, "輑"),
    (0xE466, "輎"), (0xE467, "輍"), (0xE468, "鄣"), (0xE469, "鄜"), (0xE46A, "鄠"), (0xE46B, "鄢"), (0xE46C, "鄟"), (0xE46D, "鄝"),
    (0xE46E, "鄚"), (0xE46F, "鄤"), (0xE470, "鄡"), (0xE471, "鄛"), (0xE472, "酺"), (0xE473, "酲"), (0xE474, "酹"), (0xE475, "酳"),
    (0xE476, "銥"), (0xE477, "銤"), (0xE478, "鉶"), (0xE479, "銛"), (0xE47A, "鉺"), (0xE47B, "銠"), (0xE47C, "銔"), (0xE47D, "銪"),
    (0xE47E, "銍"), (0xE4A1, "銦"), (0xE4A2, "銚"), (0xE4A3, "銫"), (0xE4A4, "鉹"), (0xE4A5, "銗"), (0xE4A6, "鉿"), (0xE4A7, "銣"),
    (0xE4A8, "鋮"), (0xE4A9, "銎"), (0xE4AA, "銂"), (0xE4AB, "銕"), (0xE4AC, "銢"), (0xE4AD, "鉽"), (0xE4AE, "銈"), (0xE4AF, "銡"),
    (0xE4B0, "銊"), (0xE4B1, "銆"), (0xE4B2, "銌"), (0xE4B3, "銙"), (0xE4B4, "銧"), (0xE4B5, "鉾"), (0xE4B6, "銇"), (0xE4B7, "銩"),
    (0xE4B8, "銝"), (0xE4B9, "銋"), (0xE4BA, "鈭"), (0xE4BB, "隞"), (0xE4BC, "隡"), (0xE4BD, "雿"), (0xE4BE, "靘"), (0xE4BF, "靽"),
    (0xE4C0, "靺"), (0xE4C1, "靾"), (0xE4C2, "鞃"), (0xE4C3, "鞀"), (0xE4C4, "鞂"), (0xE4C5, "靻"), (0xE4C6, "鞄"), (0xE4C7, "鞁"),
    (0xE4C8, "靿"), (0xE4C9, "韎"), (0xE4CA, "韍"), (0xE4CB, "頖"), (0xE4CC, "颭"), (0xE4CD, "颮"), (0xE4CE, "餂"), (0xE4CF, "餀"),
    (0xE4D0, "餇"), (0xE4D1, "馝"), (0xE4D2, "馜"), (0xE4D3, "駃"), (0xE4D4, "馹"), (0xE4D5, "馻"), (0xE4D6, "馺"), (0xE4D7, "駂"),
    (0xE4D8, "馽"), (0xE4D9, "駇"), (0xE4DA, "骱"), (0xE4DB, "髣"), (0xE4DC, "髧"), (0xE4DD, "鬾"), (0xE4DE, "鬿"), (0xE4DF, "魠"),
    (0xE4E0, "魡"), (0xE4E1, "魟"), (0xE4E2, "鳱"), (0xE4E3, "鳲"), (0xE4E4, "鳵"), (0xE4E5, "麧"), (0xE4E6, "僿"), (0xE4E7, "儃"),
    (0xE4E8, "儰"), (0xE4E9, "僸"), (0xE4EA, "儆"), (0xE4EB, "儇"), (0xE4EC, "僶"), (0xE4ED, "僾"), (0xE4EE, "儋"), (0xE4EF, "儌"),
    (0xE4F0, "僽"), (0xE4F1, "儊"), (0xE4F2, "劋"), (0xE4F3, "劌"), (0xE4F4, "勱"), (0xE4F5, "勯"), (0xE4F6, "噈"), (0xE4F7, "噂"),
    (0xE4F8, "噌"), (0xE4F9, "嘵"), (0xE4FA, "噁"), (0xE4FB, "噊"), (0xE4FC, "噉"), (0xE4FD, "噆"), (0xE4FE, "噘"), (0xE540, "噚"),
    (0xE541, "噀"), (0xE542, "嘳"), (0xE543, "嘽"), (0xE544, "嘬"), (0xE545, "嘾"), (0xE546, "嘸"), (0xE547, "嘪"), (0xE548, "嘺"),
    (0xE549, "圚"), (0xE54A, "墫"), (0xE54B, "墝"), (0xE54C, "墱"), (0xE54D, "墠"), (0xE54E, "墣"), (0xE54F, "墯"), (0xE550, "墬"),
    (0xE551, "墥"), (0xE552, "墡"), (0xE553, "壿"), (0xE554, "嫿"), (0xE555, "嫴"), (0xE556, "嫽"), (0xE557, "嫷"), (0xE558, "嫶"),
    (0xE559, "嬃"), (0xE55A, "嫸"), (0xE55B, "嬂"), (0xE55C, "嫹"), (0xE55D, "嬁"), (0xE55E, "嬇"), (0xE55F, "嬅"), (0xE560, "嬏"),
    (0xE561, "屧"), (0xE562, "嶙"), (0xE563, "嶗"), (0xE564, "嶟"), (0xE565, "嶒"), (0xE566, "嶢"), (0xE567, "嶓"), (0xE568, "嶕"),
    (0xE569, "嶠"), (0xE56A, "嶜"), (0xE56B, "嶡"), (0xE56C, "嶚"), (0xE56D, "嶞"), (0xE56E, "幩"), (0xE56F, "幝"), (0xE570, "幠"),
    (0xE571, "幜"), (0xE572, "緳"), (0xE573, "廛"), (0xE574, "廞"), (0xE575, "廡"), (0xE576, "彉"), (0xE577, "徲"), (0xE578, "憋"),
    (0xE579, "憃"), (0xE57A, "慹"), (0xE57B, "憱"), (0xE57C, "憰"), (0xE57D, "憢"), (0xE57E, "憉"), (0xE5A1, "憛"), (0xE5A2, "憓"),
    (0xE5A3, "憯"), (0xE5A4, "憭"), (0xE5A5, "憟"), (0xE5A6, "憒"), (0xE5A7, "憪"), (0xE5A8, "憡"), (0xE5A9, "憍"), (0xE5AA, "慦"),
    (0xE5AB, "憳"), (0xE5AC, "戭"), (0xE5AD, "摮"), (0xE5AE, "摰"), (0xE5AF, "撖"), (0xE5B0, "撠"), (0xE5B1, "撅"), (0xE5B2, "撗"),
    (0xE5B3, "撜"), (0xE5B4, "撏"), (0xE5B5, "撋"), (0xE5B6, "撊"), (0xE5B7, "撌"), (0xE5B8, "撣"), (0xE5B9, "撟"), (0xE5BA, "摨"),
    (0xE5BB, "撱"), (0xE5BC, "撘"), (0xE5BD, "敶"), (0xE5BE, "敺"), (0xE5BF, "敹"), (0xE5C0, "敻"), (0xE5C1, "斲"), (0xE5C2, "斳"),
    (0xE5C3, "暵"), (0xE5C4, "暰"), (0xE5C5, "暩"), (0xE5C6, "暲"), (0xE5C7, "暷"), (0xE5C8, "暪"), (0xE5C9, "暯"), (0xE5CA, "樀"),
    (0xE5CB, "樆"), (0xE5CC, "樗"), (0xE5CD, "槥"), (0xE5CE, "槸"), (0xE5CF, "樕"), (0xE5D0, "槱"), (0xE5D1, "槤"), (0xE5D2, "樠"),
    (0xE5D3, "槿"), (0xE5D4, "槬"), (0xE5D5, "槢"), (0xE5D6, "樛"), (0xE5D7, "樝"), (0xE5D8, "槾"), (0xE5D9, "樧"), (0xE5DA, "槲"),
    (0xE5DB, "槮"), (0xE5DC, "樔"), (0xE5DD, "槷"), (0xE5DE, "槧"), (0xE5DF, "橀"), (0xE5E0, "樈"), (0xE5E1, "槦"), (0xE5E2, "槻"),
    (0xE5E3, "樍"), (0xE5E4, "槼"), (0xE5E5, "槫"), (0xE5E6, "樉"), (0xE5E7, "樄"), (0xE5E8, "樘"), (0xE5E9, "樥"), (0xE5EA, "樏"),
    (0xE5EB, "槶"), (0xE5EC, "樦"), (0xE5ED, "樇"), (0xE5EE, "槴"), (0xE5EF, "樖"), (0xE5F0, "歑"), (0xE5F1, "殥"), (0xE5F2, "殣"),
    (0xE5F3, "殢"), (0xE5F4, "殦"), (0xE5F5, "氁"), (0xE5F6, "氀"), (0xE5F7, "毿"), (0xE5F8, "氂"), (0xE5F9, "潁"), (0xE5FA, "漦"),
    (0xE5FB, "潾"), (0xE5FC, "澇"), (0xE5FD, "濆"), (0xE5FE, "澒"), (0xE640, "澍"), (0xE641, "澉"), (0xE642, "澌"), (0xE643, "潢"),
    (0xE644, "潏"), (0xE645, "澅"), (0xE646, "潚"), (0xE647, "澖"), (0xE648, "潶"), (0xE649, "潬"), (0xE64A, "澂"), (0xE64B, "潕"),
    (0xE64C, "潲"), (0xE64D, "潒"), (0xE64E, "潐"), (0xE64F, "潗"), (0xE650, "澔"), (0xE651, "澓"), (0xE652, "潝"), (0xE653, "漀"),
    (0xE654, "潡"), (0xE655, "潫"), (0xE656, "潽"), (0xE657, "潧"), (0xE658, "澐"), (0xE659, "潓"), (0xE65A, "澋"), (0xE65B, "潩"),
    (0xE65C, "潿"), (0xE65D, "澕"), (0xE65E, "潣"), (0xE65F, "潷"), (0xE660, "潪"), (0xE661, "潻"), (0xE662, "熲"), (0xE663, "熯"),
    (0xE664, "熛"), (0xE665, "熰"), (0xE666, "熠"), (0xE667, "熚"), (0xE668, "熩"), (0xE669, "熵"), (0xE66A, "熝"), (0xE66B, "熥"),
    (0xE66C, "熞"), (0xE66D, "熤"), (0xE66E, "熡"), (0xE66F, "熪"), (0xE670, "熜"), (0xE671, "熧"), (0xE672, "熳"), (0xE673, "犘"),
    (0xE674, "犚"), (0xE675, "獘"), (0xE676, "獒"), (0xE677, "獞"), (0xE678, "獟"), (0xE679, "獠"), (0xE67A, "獝"), (0xE67B, "獛"),
    (0xE67C, "獡"), (0xE67D, "獚"), (0xE67E, "獙"), (0xE6A1, "獢"), (0xE6A2, "璇"), (0xE6A3, "璉"), (0xE6A4, "璊"), (0xE6A5, "璆"),
    (0xE6A6, "璁"), (0xE6A7, "瑽"), (0xE6A8, "璅"), (0xE6A9, "璈"), (0xE6AA, "瑼"), (0xE6AB, "瑹"), (0xE6AC, "甈"), (0xE6AD, "甇"),
    (0xE6AE, "畾"), (0xE6AF, "瘥"), (0xE6B0, "瘞"), (0xE6B1, "瘙"), (0xE6B2, "瘝"), (0xE6B3, "瘜"), (0xE6B4, "瘣"), (0xE6B5, "瘚"),
    (0xE6B6, "瘨"), (0xE6B7, "瘛"), (0xE6B8, "皜"), (0xE6B9, "皝"), (0xE6BA, "皞"), (0xE6BB, "皛"), (0xE6BC, "瞍"), (0xE6BD, "瞏"),
    (0xE6BE, "瞉"), (0xE6BF, "瞈"), (0xE6C0, "磍"), (0xE6C1, "碻"), (0xE6C2, "磏"), (0xE6C3, "磌"), (0xE6C4, "磑"), (0xE6C5, "磎"),
    (0xE6C6, "磔"), (0xE6C7, "磈"), (0xE6C8, "磃"), (0xE6C9, "磄"), (0xE6CA, "磉"), (0xE6CB, "禚"), (0xE6CC, "禡"), (0xE6CD, "禠"),
    (0xE6CE, "禜"), (0xE6CF, "禢"), (0xE6D0, "禛"), (0xE6D1, "歶"), (0xE6D2, "稹"), (0xE6D3, "窲"), (0xE6D4, "窴"), (0xE6D5, "窳"),
    (0xE6D6, "箷"), (0xE6D7, "篋"), (0xE6D8, "箾"), (0xE6D9, "箬"), (0xE6DA, "篎"), (0xE6DB, "箯"), (0xE6DC, "箹"), (0xE6DD, "篊"),
    (0xE6DE, "箵"), (0xE6DF, "糅"), (0xE6E0, "糈"), (0xE6E1, "糌"), (0xE6E2, "糋"), (0xE6E3, "緷"), (0xE6E4, "緛"), (0xE6E5, "緪"),
    (0xE6E6, "緧"), (0xE6E7, "緗"), (0xE6E8, "緡"), (0xE6E9, "縃"), (0xE6EA, "緺"), (0xE6EB, "緦"), (0xE6EC, "緶"), (0xE6ED, "緱"),
    (0xE6EE, "緰"), (0xE6EF, "緮"), (0xE6F0, "緟"), (0xE6F1, "罶"), (0xE6F2, "羬"), (0xE6F3, "羰"), (0xE6F4, "羭"), (0xE6F5, "翭"),
    (0xE6F6, "翫"), (0xE6F7, "翪"), (0xE6F8, "翬"), (0xE6F9, "翦"), (0xE6FA, "翨"), (0xE6FB, "聤"), (0xE6FC, "聧"), (0xE6FD, "膣"),
    (0xE6FE, "膟"), (0xE740, "膞"), (0xE741, "膕"), (0xE742, "膢"), (0xE743, "膙"), (0xE744, "膗"), (0xE745, "舖"), (0xE746, "艏"),
    (0xE747, "艓"), (0xE748, "艒"), (0xE749, "艐"), (0xE74A, "艎"), (0xE74B, "艑"), (0xE74C, "蔤"), (0xE74D, "蔻"), (0xE74E, "蔏"),
    (0xE74F, "蔀"), (0xE750, "蔩"), (0xE751, "蔎"), (0xE752, "蔉"), (0xE753, "蔍"), (0xE754, "蔟"), (0xE755, "蔊"), (0xE756, "蔧"),
    (0xE757, "蔜"), (0xE758, "蓻"), (0xE759, "蔫"), (0xE75A, "蓺"), (0xE75B, "蔈"), (0xE75C, "蔌"), (0xE75D, "蓴"), (0xE75E, "蔪"),
    (0xE75F, "蓲"), (0xE760, "蔕"), (0xE761, "蓷"), (0xE762, "蓫"), (0xE763, "蓳"), (0xE764, "蓼"), (0xE765, "蔒"), (0xE766, "蓪"),
    (0xE767, "蓩"), (0xE768, "蔖"), (0xE769, "蓾"), (0xE76A, "蔨"), (0xE76B, "蔝"), (0xE76C, "蔮"), (0xE76D, "蔂"), (0xE76E, "蓽"),
    (0xE76F, "蔞"), (0xE770, "蓶"), (0xE771, "蔱"), (0xE772, "蔦"), (0xE773, "蓧"), (0xE774, "蓨"), (0xE775, "蓰"), (0xE776, "蓯"),
    (0xE777, "蓹"), (0xE778, "蔘"), (0xE779, "蔠"), (0xE77A, "蔰"), (0xE77B, "蔋"), (0xE77C, "蔙"), (0xE77D, "蔯"), (0xE77E, "虢"),
    (0xE7A1, "蝖"), (0xE7A2, "蝣"), (0xE7A3, "蝤"), (0xE7A4, "蝷"), (0xE7A5, "蟡"), (0xE7A6, "蝳"), (0xE7A7, "蝘"), (0xE7A8, "蝔"),
    (0xE7A9, "蝛"), (0xE7AA, "蝒"), (0xE7AB, "蝡"), (0xE7AC, "蝚"), (0xE7AD, "蝑"), (0xE7AE, "蝞"), (0xE7AF, "蝭"), (0xE7B0, "蝪"),
    (0xE7B1, "蝐"), (0xE7B2, "蝎"), (0xE7B3, "蝟"), (0xE7B4, "蝝"), (0xE7B5, "蝯"), (0xE7B6, "蝬"), (0xE7B7, "蝺"), (0xE7B8, "蝮"),
    (0xE7B9, "蝜"), (0xE7BA, "蝥"), (0xE7BB, "蝏"), (0xE7BC, "蝻"), (0xE7BD, "蝵"), (0xE7BE, "蝢"), (0xE7BF, "蝧"), (0xE7C0, "蝩"),
    (0xE7C1, "衚"), (0xE7C2, "褅"), (0xE7C3, "褌"), (0xE7C4, "褔"), (0xE7C5, "褋"), (0xE7C6, "褗"), (0xE7C7, "褘"), (0xE7C8, "褙"),
    (0xE7C9, "褆"), (0xE7CA, "褖"), (0xE7CB, "褑"), (0xE7CC, "褎"), (0xE7CD, "褉"), (0xE7CE, "覢"), (0xE7CF, "覤"), (0xE7D0, "覣"),
    (0xE7D1, "觭"), (0xE7D2, "觰"), (0xE7D3, "觬"), (0xE7D4, "諏"), (0xE7D5, "諆"), (0xE7D6, "誸"), (0xE7D7, "諓"), (0xE7D8, "諑"),
    (0xE7D9, "諔"), (0xE7DA, "諕"), (0xE7DB, "誻"), (0xE7DC, "諗"), (0xE7DD, "誾"), (0xE7DE, "諀"), (0xE7DF, "諅"), (0xE7E0, "諘"),
    (0xE7E1, "諃"), (0xE7E2, "誺"), (0xE7E3, "誽"), (0xE7E4, "諙"), (0xE7E5, "谾"), (0xE7E6, "豍"), (0xE7E7, "貏"), (0xE7E8, "賥"),
    (0xE7E9, "賟"), (0xE7EA, "賙"), (0xE7EB, "賨"), (0xE7EC, "賚"), (0xE7ED, "賝"), (0xE7EE, "賧"), (0xE7EF, "趠"), (0xE7F0, "趜"),
    (0xE7F1, "趡"), (0xE7F2, "趛"), (0xE7F3, "踠"), (0xE7F4, "踣"), (0xE7F5, "踥"), (0xE7F6, "踤"), (0xE7F7, "踮"), (0xE7F8, "踕"),
    (0xE7F9, "踛"), (0xE7FA, "踖"), (0xE7FB, "踑"), (0xE7FC, "踙"), (0xE7FD, "踦"), (0xE7FE, "踧"), (0xE840, "踔"), (0xE841, "踒"),
    (0xE842, "踘"), (0xE843, "踓"), (0xE844, "踜"), (0xE845, "踗"), (0xE846, "踚"), (0xE847, "輬"), (0xE848, "輤"), (0xE849, "輘"),
    (0xE84A, "輚"), (0xE84B, "輠"), (0xE84C, "輣"), (0xE84D, "輖"), (0xE84E, "輗"), (0xE84F, "遳"), (0xE850, "遰"), (0xE851, "遯"),
    (0xE852, "遧"), (0xE853, "遫"), (0xE854, "鄯"), (0xE855, "鄫"), (0xE856, "鄩"), (0xE857, "鄪"), (0xE858, "鄲"), (0xE859, "鄦"),
    (0xE85A, "鄮"), (0xE85B, "醅"), (0xE85C, "醆"), (0xE85D, "醊"), (0xE85E, "醁"), (0xE85F, "醂"), (0xE860, "醄"), (0xE861, "醀"),
    (0xE862, "鋐"), (0xE863, "鋃"), (0xE864, "鋄"), (0xE865, "鋀"), (0xE866, "鋙"), (0xE867, "銶"), (0xE868, "鋏"), (0xE869, "鋱"),
    (0xE86A, "鋟"), (0xE86B, "鋘"), (0xE86C, "鋩"), (0xE86D, "鋗"), (0xE86E, "鋝"), (0xE86F, "鋌"), (0xE870, "鋯"), (0xE871, "鋂"),
    (0xE872, "鋨"), (0xE873, "鋊"), (0xE874, "鋈"), (0xE875, "鋎"), (0xE876, "鋦"), (0xE877, "鋍"), (0xE878, "鋕"), (0xE879, "鋉"),
    (0xE87A, "鋠"), (0xE87B, "鋞"), (0xE87C, "鋧"), (0xE87D, "鋑"), (0xE87E, "鋓"), (0xE8A1, "銵"), (0xE8A2, "鋡"), (0xE8A3, "鋆"),
    (0xE8A4, "銴"), (0xE8A5, "镼"), (0xE8A6, "閬"), (0xE8A7, "閫"), (0xE8A8, "閮"), (0xE8A9, "閰"), (0xE8AA, "隤"), (0xE8AB, "隢"),
    (0xE8AC, "雓"), (0xE8AD, "霅"), (0xE8AE, "霈"), (0xE8AF, "霂"), (0xE8B0, "靚"), (0xE8B1, "鞊"), (0xE8B2, "鞎"), (0xE8B3, "鞈"),
    (0xE8B4, "韐"), (0xE8B5, "韏"), (0xE8B6, "頞"), (0xE8B7, "頝"), (0xE8B8, "頦"), (0xE8B9, "頩"), (0xE8BA, "頨"), (0xE8BB, "頠"),
    (0xE8BC, "頛"), (0xE8BD, "頧"), (0xE8BE, "颲"), (0xE8BF, "餈"), (0xE8C0, "飺"), (0xE8C1, "餑"), (0xE8C2, "餔"), (0xE8C3, "餖"),
    (0xE8C4, "餗"), (0xE8C5, "餕"), (0xE8C6, "駜"), (0xE8C7, "駍"), (0xE8C8, "駏"), (0xE8C9, "駓"), (0xE8CA, "駔"), (0xE8CB, "駎"),
    (0xE8CC, "駉"), (0xE8CD, "駖"), (0xE8CE, "駘"), (0xE8CF, "駋"), (0xE8D0, "駗"), (0xE8D1, "駌"), (0xE8D2, "骳"), (0xE8D3, "髬"),
    (0xE8D4, "髫"), (0xE8D5, "髳"), (0xE8D6, "髲"), (0xE8D7, "髱"), (0xE8D8, "魆"), (0xE8D9, "魃"), (0xE8DA, "魧"), (0xE8DB, "魴"),
    (0xE8DC, "魱"), (0xE8DD, "魦"), (0xE8DE, "魶"), (0xE8DF, "魵"), (0xE8E0, "魰"), (0xE8E1, "魨"), (0xE8E2, "魤"), (0xE8E3, "魬"),
    (0xE8E4, "鳼"), (0xE8E5, "鳺"), (0xE8E6, "鳽"), (0xE8E7, "鳿"), (0xE8E8, "鳷"), (0xE8E9, "鴇"), (0xE8EA, "鴀"), (0xE8EB, "鳹"),
    (0xE8EC, "鳻"), (0xE8ED, "鴈"), (0xE8EE, "鴅"), (0xE8EF, "鴄"), (0xE8F0, "麃"), (0xE8F1, "黓"), (0xE8F2, "鼏"), (0xE8F3, "鼐"),
    (0xE8F4, "儜"), (0xE8F5, "儓"), (0xE8F6, "儗"), (0xE8F7, "儚"), (0xE8F8, "儑"), (0xE8F9, "凞"), (0xE8FA, "匴"), (0xE8FB, "叡"),
    (0xE8FC, "噰"), (0xE8FD, "噠"), (0xE8FE, "噮"), (0xE940, "噳"), (0xE941, "噦"), (0xE942, "噣"), (0xE943, "噭"), (0xE944, "噲"),
    (0xE945, "噞"), (0xE946, "噷"), (0xE947, "圜"), (0xE948, "圛"), (0xE949, "壈"), (0xE94A, "墽"), (0xE94B, "壉"), (0xE94C, "墿"),
    (0xE94D, "墺"), (0xE94E, "壂"), (0xE94F, "墼"), (0xE950, "壆"), (0xE951, "嬗"), (0xE952, "嬙"), (0xE953, "嬛"), (0xE954, "嬡"),
    (0xE955, "嬔"), (0xE956, "嬓"), (0xE957, "嬐"), (0xE958, "嬖"), (0xE959, "嬨"), (0xE95A, "嬚"), (0xE95B, "嬠"), (0xE95C, "嬞"),
    (0xE95D, "寯"), (0xE95E, "嶬"), (0xE95F, "嶱"), (0xE960, "嶩"), (0xE961, "嶧"), (0xE962, "嶵"), (0xE963, "嶰"), (0xE964, "嶮"),
    (0xE965, "嶪"), (0xE966, "嶨"), (0xE967, "嶲"), (0xE968, "嶭"), (0xE969, "嶯"), (0xE96A, "嶴"), (0xE96B, "幧"), (0xE96C, "幨"),
    (0xE96D, "幦"), (0xE96E, "幯"), (0xE96F, "廩"), (0xE970, "廧"), (0xE971, "廦"), (0xE972, "廨"), (0xE973, "廥"), (0xE974, "彋"),
    (0xE975, "徼"), (0xE976, "憝"), (0xE977, "憨"), (0xE978, "憖"), (0xE979, "懅"), (0xE97A, "憴"), (0xE97B, "懆"), (0xE97C, "懁"),
    (0xE97D, "懌"), (0xE97E, "憺"), (0xE9A1, "憿"), (0xE9A2, "憸"), (0xE9A3, "憌"), (0xE9A4, "擗"), (0xE9A5, "擖"), (0xE9A6, "擐"),
    (0xE9A7, "擏"), (0xE9A8, "擉"), (0xE9A9, "撽"), (0xE9AA, "撉"), (0xE9AB, "擃"), (0xE9AC, "擛"), (0xE9AD, "擳"), (0xE9AE, "擙"),
    (0xE9AF, "攳"), (0xE9B0, "敿"), (0xE9B1, "敼"), (0xE9B2, "斢"), (0xE9B3, "曈"), (0xE9B4, "暾"), (0xE9B5, "曀"), (0xE9B6, "曊"),
    (0xE9B7, "曋"), (0xE9B8, "曏"), (0xE9B9, "暽"), (0xE9BA, "暻"), (0xE9BB, "暺"), (0xE9BC, "曌"), (0xE9BD, "朣"), (0xE9BE, "樴"),
    (0xE9BF, "橦"), (0xE9C0, "橉"), (0xE9C1, "橧"), (0xE9C2, "樲"), (0xE9C3, "橨"), (0xE9C4, "樾"), (0xE9C5, "橝"), (0xE9C6, "橭"),
    (0xE9C7, "橶"), (0xE9C8, "橛"), (0xE9C9, "橑"), (0xE9CA, "樨"), (0xE9CB, "橚"), (0xE9CC, "樻"), (0xE9CD, "樿"), (0xE9CE, "橁"),
    (0xE9CF, "橪"), (0xE9D0, "橤"), (0xE9D1, "橐"), (0xE9D2, "橏"), (0xE9D3, "橔"), (0xE9D4, "橯"), (0xE9D5, "橩"), (0xE9D6, "橠"),
    (0xE9D7, "樼"), (0xE9D8, "橞"), (0xE9D9, "橖"), (0xE9DA, "橕"), (0xE9DB, "橍"), (0xE9DC, "橎"), (0xE9DD, "橆"), (0xE9DE, "歕"),
    (0xE9DF, "歔"), (0xE9E0, "歖"), (0xE9E1, "殧"), (0xE9E2, "殪"), (0xE9E3, "殫"), (0xE9E4, "毈"), (0xE9E5, "毇"), (0xE9E6, "氄"),
    (0xE9E7, "氃"), (0xE9E8, "氆"), (0xE9E9, "澭"), (0xE9EA, "濋"), (0xE9EB, "澣"), (0xE9EC, "濇"), (0xE9ED, "澼"), (0xE9EE, "濎"),
    (0xE9EF, "濈"), (0xE9F0, "潞"), (0xE9F1, "濄"), (0xE9F2, "澽"), (0xE9F3, "澞"), (0xE9F4, "濊"), (0xE9F5, "澨"), (0xE9F6, "瀄"),
    (0xE9F7, "澥"), (0xE9F8, "澮"), (0xE9F9, "澺"), (0xE9FA, "澬"), (0xE9FB, "澪"), (0xE9FC, "濏"), (0xE9FD, "澿"), (0xE9FE, "澸"),
    (0xEA40, "澢"), (0xEA41, "濉"), (0xEA42, "澫"), (0xEA43, "濍"), (0xEA44, "澯"), (0xEA45, "澲"), (0xEA46, "澰"), (0xEA47, "燅"),
    (0xEA48, "燂"), (0xEA49, "熿"), (0xEA4A, "熸"), (0xEA4B, "燖"), (0xEA4C, "燀"), (0xEA4D, "燁"), (0xEA4E, "燋"), (0xEA4F, "燔"),
    (0xEA50, "燊"), (0xEA51, "燇"), (0xEA52, "燏"), (0xEA53, "熽"), (0xEA54, "燘"), (0xEA55, "熼"), (0xEA56, "燆"), (0xEA57, "燚"),
    (0xEA58, "燛"), (0xEA59, "犝"), (0xEA5A, "犞"), (0xEA5B, "獩"), (0xEA5C, "獦"), (0xEA5D, "獧"), (0xEA5E, "獬"), (0xEA5F, "獥"),
    (0xEA60, "獫"), (0xEA61, "獪"), (0xEA62, "瑿"), (0xEA63, "璚"), (0xEA64, "璠"), (0xEA65, "璔"), (0xEA66, "璒"), (0xEA67, "璕"),
    (0xEA68, "璡"), (0xEA69, "甋"), (0xEA6A, "疀"), (0xEA6B, "瘯"), (0xEA6C, "瘭"), (0xEA6D, "瘱"), (0xEA6E, "瘽"), (0xEA6F, "瘳"),
    (0xEA70, "瘼"), (0xEA71, "瘵"), (0xEA72, "瘲"), (0xEA73, "瘰"), (0xEA74, "皻"), (0xEA75, "盦"), (0xEA76, "瞚"), (0xEA77, "瞝"),
    (0xEA78, "瞡"), (0xEA79, "瞜"), (0xEA7A, "瞛"), (0xEA7B, "瞢"), (0xEA7C, "瞣"), (0xEA7D, "瞕"), (0xEA7E, "瞙"), (0xEAA1, "瞗"),
    (0xEAA2, "磝"), (0xEAA3, "磩"), (0xEAA4, "磥"), (0xEAA5, "磪"), (0xEAA6, "磞"), (0xEAA7, "磣"), (0xEAA8, "磛"), (0xEAA9, "磡"),
    (0xEAAA, "磢"), (0xEAAB, "磭"), (0xEAAC, "磟"), (0xEAAD, "磠"), (0xEAAE, "禤"), (0xEAAF, "穄"), (0xEAB0, "穈"), (0xEAB1, "穇"),
    (0xEAB2, "窶"), (0xEAB3, "窸"), (0xEAB4, "窵"), (0xEAB5, "窱"), (0xEAB6, "窷"), (0xEAB7, "篞"), (0xEAB8, "篣"), (0xEAB9, "篧"),
    (0xEABA, "篝"), (0xEABB, "篕"), (0xEABC, "篥"), (0xEABD, "篚"), (0xEABE, "篨"), (0xEABF, "篹"), (0xEAC0, "篔"), (0xEAC1, "篪"),
    (0xEAC2, "篢"), (0xEAC3, "篜"), (0xEAC4, "篫"), (0xEAC5, "篘"), (0xEAC6, "篟"), (0xEAC7, "糒"), (0xEAC8, "糔"), (0xEAC9, "糗"),
    (0xEACA, "糐"), (0xEACB, "糑"), (0xEACC, "縒"), (0xEACD, "縡"), (0xEACE, "縗"), (0xEACF, "縌"), (0xEAD0, "縟"), (0xEAD1, "縠"),
    (0xEAD2, "縓"), (0xEAD3, "縎"), (0xEAD4, "縜"), (0xEAD5, "縕"), (0xEAD6, "縚"), (0xEAD7, "縢"), (0xEAD8, "縋"), (0xEAD9, "縏"),
    (0xEADA, "縖"), (0xEADB, "縍"), (0xEADC, "縔"), (0xEADD, "縥"), (0xEADE, "縤"), (0xEADF, "罃"), (0xEAE0, "罻"), (0xEAE1, "罼"),
    (0xEAE2, "罺"), (0xEAE3, "羱"), (0xEAE4, "翯"), (0xEAE5, "耪"), (0xEAE6, "耩"), (0xEAE7, "聬"), (0xEAE8, "膱"), (0xEAE9, "膦"),
    (0xEAEA, "膮"), (0xEAEB, "膹"), (0xEAEC, "膵"), (0xEAED, "膫"), (0xEAEE, "膰"), (0xEAEF, "膬"), (0xEAF0, "膴"), (0xEAF1, "膲"),
    (0xEAF2, "膷"), (0xEAF3, "膧"), (0xEAF4, "臲"), (0xEAF5, "艕"), (0xEAF6, "艖"), (0xEAF7, "艗"), (0xEAF8, "蕖"), (0xEAF9, "蕅"),
    (0xEAFA, "蕫"), (0xEAFB, "蕍"), (0xEAFC, "蕓"), (0xEAFD, "蕡"), (0xEAFE, "蕘"), (0xEB40, "蕀"), (0xEB41, "蕆"), (0xEB42, "蕤"),
    (0xEB43, "蕁"), (0xEB44, "蕢"), (0xEB45, "蕄"), (0xEB46, "蕑"), (0xEB47, "蕇"), (0xEB48, "蕣"), (0xEB49, "蔾"), (0xEB4A, "蕛"),
    (0xEB4B, "蕱"), (0xEB4C, "蕎"), (0xEB4D, "蕮"), (0xEB4E, "蕵"), (0xEB4F, "蕕"), (0xEB50, "蕧"), (0xEB51, "蕠"), (0xEB52, "薌"),
    (0xEB53, "蕦"), (0xEB54, "蕝"), (0xEB55, "蕔"), (0xEB56, "蕥"), (0xEB57, "蕬"), (0xEB58, "虣"), (0xEB59, "虥"), (0xEB5A, "虤"),
    (0xEB5B, "螛"), (0xEB5C, "螏"), (0xEB5D, "螗"), (0xEB5E, "螓"), (0xEB5F, "螒"), (0xEB60, "螈"), (0xEB61, "螁"), (0xEB62, "螖"),
    (0xEB63, "螘"), (0xEB64, "蝹"), (0xEB65, "螇"), (0xEB66, "螣"), (0xEB67, "螅"), (0xEB68, "螐"), (0xEB69, "螑"), (0xEB6A, "螝"),
    (0xEB6B, "螄"), (0xEB6C, "螔"), (0xEB6D, "螜"), (0xEB6E, "螚"), (0xEB6F, "螉"), (0xEB70, "褞"), (0xEB71, "褦"), (0xEB72, "褰"),
    (0xEB73, "褭"), (0xEB74, "褮"), (0xEB75, "褧"), (0xEB76, "褱"), (0xEB77, "褢"), (0xEB78, "褩"), (0xEB79, "褣"), (0xEB7A, "褯"),
    (0xEB7B, "褬"), (0xEB7C, "褟"), (0xEB7D, "觱"), (0xEB7E, "諠"), (0xEBA1, "諢"), (0xEBA2, "諲"), (0xEBA3, "諴"), (0xEBA4, "諵"),
    (0xEBA5, "諝"), (0xEBA6, "謔"), (0xEBA7, "諤"), (0xEBA8, "諟"), (0xEBA9, "諰"), (0xEBAA, "諈"), (0xEBAB, "諞"), (0xEBAC, "諡"),
    (0xEBAD, "諨"), (0xEBAE, "諿"), (0xEBAF, "諯"), (0xEBB0, "諻"), (0xEBB1, "貑"), (0xEBB2, "貒"), (0xEBB3, "貐"), (0xEBB4, "賵"),
    (0xEBB5, "賮"), (0xEBB6, "賱"), (0xEBB7, "賰"), (0xEBB8, "賳"), (0xEBB9, "赬"), (0xEBBA, "赮"), (0xEBBB, "趥"), (0xEBBC, "趧"),
    (0xEBBD, "踳"), (0xEBBE, "踾"), (0xEBBF, "踸"), (0xEBC0, "蹀"), (0xEBC1, "蹅"), (0xEBC2, "踶"), (0xEBC3, "踼"), (0xEBC4, "踽"),
    (0xEBC5, "蹁"), (0xEBC6, "踰"), (0xEBC7, "踿"), (0xEBC8, "躽"), (0xEBC9, "輶"), (0xEBCA, "輮"), (0xEBCB, "輵"), (0xEBCC, "輲"),
    (0xEBCD, "輹"), (0xEBCE, "輷"), (0xEBCF, "輴"), (0xEBD0, "遶"), (0xEBD1, "遹"), (0xEBD2, "遻"), (0xEBD3, "邆"), (0xEBD4, "郺"),
    (0xEBD5, "鄳"), (0xEBD6, "鄵"), (0xEBD7, "鄶"), (0xEBD8, "醓"), (0xEBD9, "醐"), (0xEBDA, "醑"), (0xEBDB, "醍"), (0xEBDC, "醏"),
    (0xEBDD, "錧"), (0xEBDE, "錞"), (0xEBDF, "錈"), (0xEBE0, "錟"), (0xEBE1, "錆"), (0xEBE2, "錏"), (0xEBE3, "鍺"), (0xEBE4, "錸"),
    (0xEBE5, "錼"), (0xEBE6, "錛"), (0xEBE7, "錣"), (0xEBE8, "錒"), (0xEBE9, "錁"), (0xEBEA, "鍆"), (0xEBEB, "錭"), (0xEBEC, "錎"),
    (0xEBED, "錍"), (0xEBEE, "鋋"), (0xEBEF, "錝"), (0xEBF0, "鋺"), (0xEBF1, "錥"), (0xEBF2, "錓"), (0xEBF3, "鋹"), (0xEBF4, "鋷"),
    (0xEBF5, "錴"), (0xEBF6, "錂"), (0xEBF7, "錤"), (0xEBF8, "鋿"), (0xEBF9, "錩"), (0xEBFA, "錹"), (0xEBFB, "錵"), (0xEBFC, "錪"),
    (0xEBFD, "錔"), (0xEBFE, "錌"), (0xEC40, "錋"), (0xEC41, "鋾"), (0xEC42, "錉"), (0xEC43, "錀"), (0xEC44, "鋻"), (0xEC45, "錖"),
    (0xEC46, "閼"), (0xEC47, "闍"), (0xEC48, "閾"), (0xEC49, "閹"), (0xEC4A, "閺"), (0xEC4B, "閶"), (0xEC4C, "閿"), (0xEC4D, "閵"),
    (0xEC4E, "閽"), (0xEC4F, "隩"), (0xEC50, "雔"), (0xEC51, "霋"), (0xEC52, "霒"), (0xEC53, "霐"), (0xEC54, "鞙"), (0xEC55, "鞗"),
    (0xEC56, "鞔"), (0xEC57, "韰"), (0xEC58, "韸"), (0xEC59, "頵"), (0xEC5A, "頯"), (0xEC5B, "頲"), (0xEC5C, "餤"), (0xEC5D, "餟"),
    (0xEC5E, "餧"), (0xEC5F, "餩"), (0xEC60, "馞"), (0xEC61, "駮"), (0xEC62, "駬"), (0xEC63, "駥"), (0xEC64, "駤"), (0xEC65, "駰"),
    (0xEC66, "駣"), (0xEC67, "駪"), (0xEC68, "駩"), (0xEC69, "駧"), (0xEC6A, "骹"), (0xEC6B, "骿"), (0xEC6C, "骴"), (0xEC6D, "骻"),
    (0xEC6E, "髶"), (0xEC6F, "髺"), (0xEC70, "髹"), (0xEC71, "髷"), (0xEC72, "鬳"), (0xEC73, "鮀"), (0xEC74, "鮅"), (0xEC75, "鮇"),
    (0xEC76, "魼"), (0xEC77, "魾"), (0xEC78, "魻"), (0xEC79, "鮂"), (0xEC7A, "鮓"), (0xEC7B, "鮒"), (0xEC7C, "鮐"), (0xEC7D, "魺"),
    (0xEC7E, "鮕"), (0xECA1, "魽"), (0xECA2, "鮈"), (0xECA3, "鴥"), (0xECA4, "鴗"), (0xECA5, "鴠"), (0xECA6, "鴞"), (0xECA7, "鴔"),
    (0xECA8, "鴩"), (0xECA9, "鴝"), (0xECAA, "鴘"), (0xECAB, "鴢"), (0xECAC, "鴐"), (0xECAD, "鴙"), (0xECAE, "鴟"), (0xECAF, "麈"),
    (0xECB0, "麆"), (0xECB1, "麇"), (0xECB2, "麮"), (0xECB3, "麭"), (0xECB4, "黕"), (0xECB5, "黖"), (0xECB6, "黺"), (0xECB7, "鼒"),
    (0xECB8, "鼽"), (0xECB9, "儦"), (0xECBA, "儥"), (0xECBB, "儢"), (0xECBC, "儤"), (0xECBD, "儠"), (0xECBE, "儩"), (0xECBF, "勴"),
    (0xECC0, "嚓"), (0xECC1, "嚌"), (0xECC2, "嚍"), (0xECC3, "嚆"), (0xECC4, "嚄"), (0xECC5, "嚃"), (0xECC6, "噾"), (0xECC7, "嚂"),
    (0xECC8, "噿"), (0xECC9, "嚁"), (0xECCA, "壖"), (0xECCB, "壔"), (0xECCC, "壏"), (0xECCD, "壒"), (0xECCE, "嬭"), (0xECCF, "嬥"),
    (0xECD0, "嬲"), (0xECD1, "嬣"), (0xECD2, "嬬"), (0xECD3, "嬧"), (0xECD4, "嬦"), (0xECD5, "嬯"), (0xECD6, "嬮"), (0xECD7, "孻"),
    (0xECD8, "寱"), (0xECD9, "寲"), (0xECDA, "嶷"), (0xECDB, "幬"), (0xECDC, "幪"), (0xECDD, "徾"), (0xECDE, "徻"), (0xECDF, "懃"),
    (0xECE0, "憵"), (0xECE1, "憼"), (0xECE2, "懧"), (0xECE3, "懠"), (0xECE4, "懥"), (0xECE5, "懤"), (0xECE6, "懨"), (0xECE7, "懞"),
    (0xECE8, "擯"), (0xECE9, "擩"), (0xECEA, "擣"), (0xECEB, "擫"), (0xECEC, "擤"), (0xECED, "擨"), (0xECEE, "斁"), (0xECEF, "斀"),
    (0xECF0, "斶"), (0xECF1, "旚"), (0xECF2, "曒"), (0xECF3, "檍"), (0xECF4, "檖"), (0xECF5, "檁"), (0xECF6, "檥"), (0xECF7, "檉"),
    (0xECF8, "檟"), (0xECF9, "檛"), (0xECFA, "檡"), (0xECFB, "檞"), (0xECFC, "檇"), (0xECFD, "檓"), (0xECFE, "檎"), (0xED40, "檕"),
    (0xED41, "檃"), (0xED42, "檨"), (0xED43, "檤"), (0xED44, "檑"), (0xED45, "橿"), (0xED46, "檦"), (0xED47, "檚"), (0xED48, "檅"),
    (0xED49, "檌"), (0xED4A, "檒"), (0xED4B, "歛"), (0xED4C, "殭"), (0xED4D, "氉"), (0xED4E, "濌"), (0xED4F, "澩"), (0xED50, "濴"),
    (0xED51, "濔"), (0xED52, "濣"), (0xED53, "濜"), (0xED54, "濭"), (0xED55, "濧"), (0xED56, "濦"), (0xED57, "濞"), (0xED58, "濲"),
    (0xED59, "濝"), (0xED5A, "濢"), (0xED5B, "濨"), (0xED5C, "燡"), (0xED5D, "燱"), (0xED5E, "燨"), (0xED5F, "燲"), (0xED60, "燤"),
    (0xED61, "燰"), (0xED62, "燢"), (0xED63, "獳"), (0xED64, "獮"), (0xED65, "獯"), (0xED66, "璗"), (0xED67, "璲"), (0xED68, "璫"),
    (0xED69, "璐"), (0xED6A, "璪"), (0xED6B, "璭"), (0xED6C, "璱"), (0xED6D, "璥"), (0xED6E, "璯"), (0xED6F, "甐"), (0xED70, "甑"),
    (0xED71, "甒"), (0xED72, "甏"), (0xED73, "疄"), (0xED74, "癃"), (0xED75, "癈"), (0xED76, "癉"), (0xED77, "癇"), (0xED78, "皤"),
    (0xED79, "盩"), (0xED7A, "瞵"), (0xED7B, "瞫"), (0xED7C, "瞲"), (0xED7D, "瞷"), (0xED7E, "瞶"), (0xEDA1, "瞴"), (0xEDA2, "瞱"),
    (0xEDA3, "瞨"), (0xEDA4, "矰"), (0xEDA5, "磳"), (0xEDA6, "磽"), (0xEDA7, "礂"), (0xEDA8, "磻"), (0xEDA9, "磼"), (0xEDAA, "磲"),
    (0xEDAB, "礅"), (0xEDAC, "磹"), (0xEDAD, "磾"), (0xEDAE, "礄"), (0xEDAF, "禫"), (0xEDB0, "禨"), (0xEDB1, "穜"), (0xEDB2, "穛"),
    (0xEDB3, "穖"), (0xEDB4, "穘"), (0xEDB5, "穔"), (0xEDB6, "穚"), (0xEDB7, "窾"), (0xEDB8, "竀"), (0xEDB9, "竁"), (0xEDBA, "簅"),
    (0xEDBB, "簏"), (0xEDBC, "篲"), (0xEDBD, "簀"), (0xEDBE, "篿"), (0xEDBF, "篻"), (0xEDC0, "簎"), (0xEDC1, "篴"), (0xEDC2, "簋"),
    (0xEDC3, "篳"), (0xEDC4, "簂"), (0xEDC5, "簉"), (0xEDC6, "簃"), (0xEDC7, "簁"), (0xEDC8, "篸"), (0xEDC9, "篽"), (0xEDCA, "簆"),
    (0xEDCB, "篰"), (0xEDCC, "篱"), (0xEDCD, "簐"), (0xEDCE, "簊"), (0xEDCF, "糨"), (0xEDD0, "縭"), (0xEDD1, "縼"), (0xEDD2, "繂"),
    (0xEDD3, "縳"), (0xEDD4, "顈"), (0xEDD5, "縸"), (0xEDD6, "縪"), (0xEDD7, "繉"), (0xEDD8, "繀"), (0xEDD9, "繇"), (0xEDDA, "縩"),
    (0xEDDB, "繌"), (0xEDDC, "縰"), (0xEDDD, "縻"), (0xEDDE, "縶"), (0xEDDF, "繄"), (0xEDE0, "縺"), (0xEDE1, "罅"), (0xEDE2, "罿"),
    (0xEDE3, "罾"), (0xEDE4, "罽"), (0xEDE5, "翴"), (0xEDE6, "翲"), (0xEDE7, "耬"), (0xEDE8, "膻"), (0xEDE9, "臄"), (0xEDEA, "臌"),
    (0xEDEB, "臊"), (0xEDEC, "臅"), (0xEDED, "臇"), (0xEDEE, "膼"), (0xEDEF, "臩"), (0xEDF0, "艛"), (0xEDF1, "艚"), (0xEDF2, "艜"),
    (0xEDF3, "薃"), (0xEDF4, "薀"), (0xEDF5, "薏"), (0xEDF6, "薧"), (0xEDF7, "薕"), (0xEDF8, "薠"), (0xEDF9, "薋"), (0xEDFA, "薣"),
    (0xEDFB, "蕻"), (0xEDFC, "薤"), (0xEDFD, "薚"), (0xEDFE, "薞"), (0xEE40, "蕷"), (0xEE41, "蕼"), (0xEE42, "薉"), (0xEE43, "薡"),
    (0xEE44, "蕺"), (0xEE45, "蕸"), (0xEE46, "蕗"), (0xEE47, "薎"), (0xEE48, "薖"), (0xEE49, "薆"), (0xEE4A, "薍"), (0xEE4B, "薙"),
    (0xEE4C, "薝"), (0xEE4D, "薁"), (0xEE4E, "薢"), (0xEE4F, "薂"), (0xEE50, "薈"), (0xEE51, "薅"), (0xEE52, "蕹"), (0xEE53, "蕶"),
    (0xEE54, "薘"), (0xEE55, "薐"), (0xEE56, "薟"), (0xEE57, "虨"), (0xEE58, "螾"), (0xEE59, "螪"), (0xEE5A, "螭"), (0xEE5B, "蟅"),
    (0xEE5C, "螰"), (0xEE5D, "螬"), (0xEE5E, "螹"), (0xEE5F, "螵"), (0xEE60, "螼"), (0xEE61, "螮"), (0xEE62, "蟉"), (0xEE63, "蟃"),
    (0xEE64, "蟂"), (0xEE65, "蟌"), (0xEE66, "螷"), (0xEE67, "螯"), (0xEE68, "蟄"), (0xEE69, "蟊"), (0xEE6A, "螴"), (0xEE6B, "螶"),
    (0xEE6C, "螿"), (0xEE6D, "螸"), (0xEE6E, "螽"), (0xEE6F, "蟞"), (0xEE70, "螲"), (0xEE71, "褵"), (0xEE72, "褳"), (0xEE73, "褼"),
    (0xEE74, "褾"), (0xEE75, "襁"), (0xEE76, "襒"), (0xEE77, "褷"), (0xEE78, "襂"), (0xEE79, "覭"), (0xEE7A, "覯"), (0xEE7B, "覮"),
    (0xEE7C, "觲"), (0xEE7D, "觳"), (0xEE7E, "謞"), (0xEEA1, "謘"), (0xEEA2, "謖"), (0xEEA3, "謑"), (0xEEA4, "謅"), (0xEEA5, "謋"),
    (0xEEA6, "謢"), (0xEEA7, "謏"), (0xEEA8, "謒"), (0xEEA9, "謕"), (0xEEAA, "謇"), (0xEEAB, "謍"), (0xEEAC, "謈"), (0xEEAD, "謆"),
    (0xEEAE, "謜"), (0xEEAF, "謓"), (0xEEB0, "謚"), (0xEEB1, "豏"), (0xEEB2, "豰"), (0xEEB3, "豲"), (0xEEB4, "豱"), (0xEEB5, "豯"),
    (0xEEB6, "貕"), (0xEEB7, "貔"), (0xEEB8, "賹"), (0xEEB9, "赯"), (0xEEBA, "蹎"), (0xEEBB, "蹍"), (0xEEBC, "蹓"), (0xEEBD, "蹐"),
    (0xEEBE, "蹌"), (0xEEBF, "蹇"), (0xEEC0, "轃"), (0xEEC1, "轀"), (0xEEC2, "邅"), (0xEEC3, "遾"), (0xEEC4, "鄸"), (0xEEC5, "醚"),
    (0xEEC6, "醢"), (0xEEC7, "醛"), (0xEEC8, "醙"), (0xEEC9, "醟"), (0xEECA, "醡"), (0xEECB, "醝"), (0xEECC, "醠"), (0xEECD, "鎡"),
    (0xEECE, "鎃"), (0xEECF, "鎯"), (0xEED0, "鍤"), (0xEED1, "鍖"), (0xEED2, "鍇"), (0xEED3, "鍼"), (0xEED4, "鍘"), (0xEED5, "鍜"),
    (0xEED6, "鍶"), (0xEED7, "鍉"), (0xEED8, "鍐"), (0xEED9, "鍑"), (0xEEDA, "鍠"), (0xEEDB, "鍭"), (0xEEDC, "鎏"), (0xEEDD, "鍌"),
    (0xEEDE, "鍪"), (0xEEDF, "鍹"), (0xEEE0, "鍗"), (0xEEE1, "鍕"), (0xEEE2, "鍒"), (0xEEE3, "鍏"), (0xEEE4, "鍱"), (0xEEE5, "鍷"),
    (0xEEE6, "鍻"), (0xEEE7, "鍡"), (0xEEE8, "鍞"), (0xEEE9, "鍣"), (0xEEEA, "鍧"), (0xEEEB, "鎀"), (0xEEEC, "鍎"), (0xEEED, "鍙"),
    (0xEEEE, "闇"), (0xEEEF, "闀"), (0xEEF0, "闉"), (0xEEF1, "闃"), (0xEEF2, "闅"), (0xEEF3, "閷"), (0xEEF4, "隮"), (0xEEF5, "隰"),
    (0xEEF6, "隬"), (0xEEF7, "霠"), (0xEEF8, "霟"), (0xEEF9, "霘"), (0xEEFA, "霝"), (0xEEFB, "霙"), (0xEEFC, "鞚"), (0xEEFD, "鞡"),
    (0xEEFE, "鞜"), (0xEF40, "鞞"), (0xEF41, "鞝"), (0xEF42, "韕"), (0xEF43, "韔"), (0xEF44, "韱"), (0xEF45, "顁"), (0xEF46, "顄"),
    (0xEF47, "顊"), (0xEF48, "顉"), (0xEF49, "顅"), (0xEF4A, "顃"), (0xEF4B, "餥"), (0xEF4C, "餫"), (0xEF4D, "餬"), (0xEF4E, "餪"),
    (0xEF4F, "餳"), (0xEF50, "餲"), (0xEF51, "餯"), (0xEF52, "餭"), (0xEF53, "餱"), (0xEF54, "餰"), (0xEF55, "馘"), (0xEF56, "馣"),
    (0xEF57, "馡"), (0xEF58, "騂"), (0xEF59, "駺"), (0xEF5A, "駴"), (0xEF5B, "駷"), (0xEF5C, "駹"), (0xEF5D, "駸"), (0xEF5E, "駶"),
    (0xEF5F, "駻"), (0xEF60, "駽"), (0xEF61, "駾"), (0xEF62, "駼"), (0xEF63, "騃"), (0xEF64, "骾"), (0xEF65, "髾"), (0xEF66, "髽"),
    (0xEF67, "鬁"), (0xEF68, "髼"), (0xEF69, "魈"), (0xEF6A, "鮚"), (0xEF6B, "鮨"), (0xEF6C, "鮞"), (0xEF6D, "鮛"), (0xEF6E, "鮦"),
    (0xEF6F, "鮡"), (0xEF70, "鮥"), (0xEF71, "鮤"), (0xEF72, "鮆"), (0xEF73, "鮢"), (0xEF74, "鮠"), (0xEF75, "鮯"), (0xEF76, "鴳"),
    (0xEF77, "鵁"), (0xEF78, "鵧"), (0xEF79, "鴶"), (0xEF7A, "鴮"), (0xEF7B, "鴯"), (0xEF7C, "鴱"), (0xEF7D, "鴸"), (0xEF7E, "鴰"),
    (0xEFA1, "鵅"), (0xEFA2, "鵂"), (0xEFA3, "鵃"), (0xEFA4, "鴾"), (0xEFA5, "鴷"), (0xEFA6, "鵀"), (0xEFA7, "鴽"), (0xEFA8, "翵"),
    (0xEFA9, "鴭"), (0xEFAA, "麊"), (0xEFAB, "麉"), (0xEFAC, "麍"), (0xEFAD, "麰"), (0xEFAE, "黈"), (0xEFAF, "黚"), (0xEFB0, "黻"),
    (0xEFB1, "黿"), (0xEFB2, "鼤"), (0xEFB3, "鼣"), (0xEFB4, "鼢"), (0xEFB5, "齔"), (0xEFB6, "龠"), (0xEFB7, "儱"), (0xEFB8, "儭"),
    (0xEFB9, "儮"), (0xEFBA, "嚘"), (0xEFBB, "嚜"), (0xEFBC, "嚗"), (0xEFBD, "嚚"), (0xEFBE, "嚝"), (0xEFBF, "嚙"), (0xEFC0, "奰"),
    (0xEFC1, "嬼"), (0xEFC2, "屩"), (0xEFC3, "屪"), (0xEFC4, "巀"), (0xEFC5, "幭"), (0xEFC6, "幮"), (0xEFC7, "懘"), (0xEFC8, "懟"),
    (0xEFC9, "懭"), (0xEFCA, "懮"), (0xEFCB, "懱"), (0xEFCC, "懪"), (0xEFCD, "懰"), (0xEFCE, "懫"), (0xEFCF, "懖"), (0xEFD0, "懩"),
    (0xEFD1, "擿"), (0xEFD2, "攄"), (0xEFD3, "擽"), (0xEFD4, "擸"), (0xEFD5, "攁"), (0xEFD6, "攃"), (0xEFD7, "擼"), (0xEFD8, "斔"),
    (0xEFD9, "旛"), (0xEFDA, "曚"), (0xEFDB, "曛"), (0xEFDC, "曘"), (0xEFDD, "櫅"), (0xEFDE, "檹"), (0xEFDF, "檽"), (0xEFE0, "櫡"),
    (0xEFE1, "櫆"), (0xEFE2, "檺"), (0xEFE3, "檶"), (0xEFE4, "檷"), (0xEFE5, "櫇"), (0xEFE6, "檴"), (0xEFE7, "檭"), (0xEFE8, "歞"),
    (0xEFE9, "毉"), (0xEFEA, "氋"), (0xEFEB, "瀇"), (0xEFEC, "瀌"), (0xEFED, "瀍"), (0xEFEE, "瀁"), (0xEFEF, "瀅"), (0xEFF0, "瀔"),
    (0xEFF1, "瀎"), (0xEFF2, "濿"), (0xEFF3, "瀀"), (0xEFF4, "濻"), (0xEFF5, "瀦"), (0xEFF6, "濼"), (0xEFF7, "濷"), (0xEFF8, "瀊"),
    (0xEFF9, "爁"), (0xEFFA, "燿"), (0xEFFB, "燹"), (0xEFFC, "爃"), (0xEFFD, "燽"), (0xEFFE, "獶"), (0xF040, "璸"), (0xF041, "瓀"),
    (0xF042, "璵"), (0xF043, "瓁"), (0xF044, "璾"), (0xF045, "璶"), (0xF046, "璻"), (0xF047, "瓂"), (0xF048, "甔"), (0xF049, "甓"),
    (0xF04A, "癜"), (0xF04B, "癤"), (0xF04C, "癙"), (0xF04D, "癐"), (0xF04E, "癓"), (0xF04F, "癗"), (0xF050, "癚"), (0xF051, "皦"),
    (0xF052, "皽"), (0xF053, "盬"), (0xF054, "矂"), (0xF055, "瞺"), (0xF056, "磿"), (0xF057, "礌"), (0xF058, "礓"), (0xF059, "礔"),
    (0xF05A, "礉"), (0xF05B, "礐"), (0xF05C, "礒"), (0xF05D, "礑"), (0xF05E, "禭"), (0xF05F, "禬"), (0xF060, "穟"), (0xF061, "簜"),
    (0xF062, "簩"), (0xF063, "簙"), (0xF064, "簠"), (0xF065, "簟"), (0xF066, "簭"), (0xF067, "簝"), (0xF068, "簦"), (0xF069, "簨"),
    (0xF06A, "簢"), (0xF06B, "簥"), (0xF06C, "簰"), (0xF06D, "繜"), (0xF06E, "繐"), (0xF06F, "繖"), (0xF070, "繣"), (0xF071, "繘"),
    (0xF072, "繢"), (0xF073, "繟"), (0xF074, "繑"), (0xF075, "繠"), (0xF076, "繗"), (0xF077, "繓"), (0xF078, "羵"), (0xF079, "羳"),
    (0xF07A, "翷"), (0xF07B, "翸"), (0xF07C, "聵"), (0xF07D, "臑"), (0xF07E, "臒"), (0xF0A1, "臐"), (0xF0A2, "艟"), (0xF0A3, "艞"),
    (0xF0A4, "薴"), (0xF0A5, "藆"), (0xF0A6, "藀"), (0xF0A7, "藃"), (0xF0A8, "藂"), (0xF0A9, "薳"), (0xF0AA, "薵"), (0xF0AB, "薽"),
    (0xF0AC, "藇"), (0xF0AD, "藄"), (0xF0AE, "薿"), (0xF0AF, "藋"), (0xF0B0, "藎"), (0xF0B1, "藈"), (0xF0B2, "藅"), (0xF0B3, "薱"),
    (0xF0B4, "薶"), (0xF0B5, "藒"), (0xF0B6, "蘤"), (0xF0B7, "薸"), (0xF0B8, "薷"), (0xF0B9, "薾"), (0xF0BA, "虩"), (0xF0BB, "蟧"),
    (0xF0BC, "蟦"), (0xF0BD, "蟢"), (0xF0BE, "蟛"), (0xF0BF, "蟫"), (0xF0C0, "蟪"), (0xF0C1, "蟥"), (0xF0C2, "蟟"), (0xF0C3, "蟳"),
    (0xF0C4, "蟤"), (0xF0C5, "蟔"), (0xF0C6, "蟜"), (0xF0C7, "蟓"), (0xF0C8, "蟭"), (0xF0C9, "蟘"), (0xF0CA, "蟣"), (0xF0CB, "螤"),
    (0xF0CC, "蟗"), (0xF0CD, "蟙"), (0xF0CE, "蠁"), (0xF0CF, "蟴"), (0xF0D0, "蟨"), (0xF0D1, "蟝"), (0xF0D2, "襓"), (0xF0D3, "襋"),
    (0xF0D4, "襏"), (0xF0D5, "襌"), (0xF0D6, "襆"), (0xF0D7, "襐"), (0xF0D8, "襑"), (0xF0D9, "襉"), (0xF0DA, "謪"), (0xF0DB, "謧"),
    (0xF0DC, "謣"), (0xF0DD, "謳"), (0xF0DE, "謰"), (0xF0DF, "謵"), (0xF0E0, "譇"), (0xF0E1, "謯"), (0xF0E2, "謼"), (0xF0E3, "謾"),
    (0xF0E4, "謱"), (0xF0E5, "謥"), (0xF0E6, "謷"), (0xF0E7, "謦"), (0xF0E8, "謶"), (0xF0E9, "謮"), (0xF0EA, "謤"), (0xF0EB, "謻"),
    (0xF0EC, "謽"), (0xF0ED, "謺"), (0xF0EE, "豂"), (0xF0EF, "豵"), (0xF0F0, "貙"), (0xF0F1, "貘"), (0xF0F2, "貗"), (0xF0F3, "賾"),
    (0xF0F4, "贄"), (0xF0F5, "贂"), (0xF0F6, "贀"), (0xF0F7, "蹜"), (0xF0F8, "蹢"), (0xF0F9, "蹠"), (0xF0FA, "蹗"), (0xF0FB, "蹖"),
    (0xF0FC, "蹞"), (0xF0FD, "蹥"), (0xF0FE, "蹧"), (0xF140, "蹛"), (0xF141, "蹚"), (0xF142, "蹡"), (0xF143, "蹝"), (0xF144, "蹩"),
    (0xF145, "蹔"), (0xF146, "轆"), (0xF147, "轇"), (0xF148, "轈"), (0xF149, "轋"), (0xF14A, "鄨"), (0xF14B, "鄺"), (0xF14C, "鄻"),
    (0xF14D, "鄾"), (0xF14E, "醨"), (0xF14F, "醥"), (0xF150, "醧"), (0xF151, "醯"), (0xF152, "醪"), (0xF153, "鎵"), (0xF154, "鎌"),
    (0xF155, "鎒"), (0xF156, "鎷"), (0xF157, "鎛"), (0xF158, "鎝"), (0xF159, "鎉"), (0xF15A, "鎧"), (0xF15B, "鎎"), (0xF15C, "鎪"),
    (0xF15D, "鎞"), (0xF15E, "鎦"), (0xF15F, "鎕"), (0xF160, "鎈"), (0xF161, "鎙"), (0xF162, "鎟"), (0xF163, "鎍"), (0xF164, "鎱"),
    (0xF165, "鎑"), (0xF166, "鎲"), (0xF167, "鎤"), (0xF168, "鎨"), (0xF169, "鎴"), (0xF16A, "鎣"), (0xF16B, "鎥"), (0xF16C, "闒"),
    (0xF16D, "闓"), (0xF16E, "闑"), (0xF16F, "隳"), (0xF170, "雗"), (0xF171, "雚"), (0xF172, "巂"), (0xF173, "雟"), (0xF174, "雘"),
    (0xF175, "雝"), (0xF176, "霣"), (0xF177, "霢"), (0xF178, "霥"), (0xF179, "鞬"), (0xF17A, "鞮"), (0xF17B, "鞨"), (0xF17C, "鞫"),
    (0xF17D, "鞤"), (0xF17E, "鞪"), (0xF1A1, "鞢"), (0xF1A2, "鞥"), (0xF1A3, "韗"), (0xF1A4, "韙"), (0xF1A5, "韖"), (0xF1A6, "韘"),
    (0xF1A7, "韺"), (0xF1A8, "顐"), (0xF1A9, "顑"), (0xF1AA, "顒"), (0xF1AB, "颸"), (0xF1AC, "饁"), (0xF1AD, "餼"), (0xF1AE, "餺"),
    (0xF1AF, "騏"), (0xF1B0, "騋"), (0xF1B1, "騉"), (0xF1B2, "騍"), (0xF1B3, "騄"), (0xF1B4, "騑"), (0xF1B5, "騊"), (0xF1B6, "騅"),
    (0xF1B7, "騇"), (0xF1B8, "騆"), (0xF1B9, "髀"), (0xF1BA, "髜"), (0xF1BB, "鬈"), (0xF1BC, "鬄"), (0xF1BD, "鬅"), (0xF1BE, "鬩"),
    (0xF1BF, "鬵"), (0xF1C0, "魊"), (0xF1C1, "魌"), (0xF1C2, "魋"), (0xF1C3, "鯇"), (0xF1C4, "鯆"), (0xF1C5, "鯃"), (0xF1C6, "鮿"),
    (0xF1C7, "鯁"), (0xF1C8, "鮵"), (0xF1C9, "鮸"), (0xF1CA, "鯓"), (0xF1CB, "鮶"), (0xF1CC, "鯄"), (0xF1CD, "鮹"), (0xF1CE, "鮽"),
    (0xF1CF, "鵜"), (0xF1D0, "鵓"), (0xF1D1, "鵏"), (0xF1D2, "鵊"), (0xF1D3, "鵛"), (0xF1D4, "鵋"), (0xF1D5, "鵙"), (0xF1D6, "鵖"),
    (0xF1D7, "鵌"), (0xF1D8, "鵗"), (0xF1D9, "鵒"), (0xF1DA, "鵔"), (0xF1DB, "鵟"), (0xF1DC, "鵘"), (0xF1DD, "鵚"), (0xF1DE, "麎"),
    (0xF1DF, "麌"), (0xF1E0, "黟"), (0xF1E1, "鼁"), (0xF1E2, "鼀"), (0xF1E3, "鼖"), (0xF1E4, "鼥"), (0xF1E5, "鼫"), (0xF1E6, "鼪"),
    (0xF1E7, "鼩"), (0xF1E8, "鼨"), (0xF1E9, "齌"), (0xF1EA, "齕"), (0xF1EB, "儴"), (0xF1EC, "儵"), (0xF1ED, "劖"), (0xF1EE, "勷"),
    (0xF1EF, "厴"), (0xF1F0, "嚫"), (0xF1F1, "嚭"), (0xF1F2, "嚦"), (0xF1F3, "嚧"), (0xF1F4, "嚪"), (0xF1F5, "嚬"), (0xF1F6, "壚"),
    (0xF1F7, "壝"), (0xF1F8, "壛"), (0xF1F9, "夒"), (0xF1FA, "嬽"), (0xF1FB, "嬾"), (0xF1FC, "嬿"), (0xF1FD, "巃"), (0xF1FE, "幰"),
    (0xF240, "徿"), (0xF241, "懻"), (0xF242, "攇"), (0xF243, "攐"), (0xF244, "攍"), (0xF245, "攉"), (0xF246, "攌"), (0xF247, "攎"),
    (0xF248, "斄"), (0xF249, "旞"), (0xF24A, "旝"), (0xF24B, "曞"), (0xF24C, "櫧"), (0xF24D, "櫠"), (0xF24E, "櫌"), (0xF24F, "櫑"),
    (0xF250, "櫙"), (0xF251, "櫋"), (0xF252, "櫟"), (0xF253, "櫜"), (0xF254, "櫐"), (0xF255, "櫫"), (0xF256, "櫏"), (0xF257, "櫍"),
    (0xF258, "櫞"), (0xF259, "歠"), (0xF25A, "殰"), (0xF25B, "氌"), (0xF25C, "瀙"), (0xF25D, "瀧"), (0xF25E, "瀠"), (0xF25F, "瀖"),
    (0xF260, "瀫"), (0xF261, "瀡"), (0xF262, "瀢"), (0xF263, "瀣"), (0xF264, "瀩"), (0xF265, "瀗"), (0xF266, "瀤"), (0xF267, "瀜"),
    (0xF268, "瀪"), (0xF269, "爌"), (0xF26A, "爊"), (0xF26B, "爇"), (0xF26C, "爂"), (0xF26D, "爅"), (0xF26E, "犥"), (0xF26F, "犦"),
    (0xF270, "犤"), (0xF271, "犣"), (0xF272, "犡"), (0xF273, "瓋"), (0xF274, "瓅"), (0xF275, "璷"), (0xF276, "瓃"), (0xF277, "甖"),
    (0xF278, "癠"), (0xF279, "矉"), (0xF27A, "矊"), (0xF27B, "矄"), (0xF27C, "矱"), (0xF27D, "礝"), (0xF27E, "礛"), (0xF2A1, "礡"),
    (0xF2A2, "礜"), (0xF2A3, "礗"), (0xF2A4, "礞"), (0xF2A5, "禰"), (0xF2A6, "穧"), (0xF2A7, "穨"), (0xF2A8, "簳"), (0xF2A9, "簼"),
    (0xF2AA, "簹"), (0xF2AB, "簬"), (0xF2AC, "簻"), (0xF2AD, "糬"), (0xF2AE, "糪"), (0xF2AF, "繶"), (0xF2B0, "繵"), (0xF2B1, "繸"),
    (0xF2B2, "繰"), (0xF2B3, "繷"), (0xF2B4, "繯"), (0xF2B5, "繺"), (0xF2B6, "繲"), (0xF2B7, "繴"), (0xF2B8, "繨"), (0xF2B9, "罋"),
    (0xF2BA, "罊"), (0xF2BB, "羃"), (0xF2BC, "羆"), (0xF2BD, "羷"), (0xF2BE, "翽"), (0xF2BF, "翾"), (0xF2C0, "聸"), (0xF2C1, "臗"),
    (0xF2C2, "臕"), (0xF2C3, "艤"), (0xF2C4, "艡"), (0xF2C5, "艣"), (0xF2C6, "藫"), (0xF2C7, "藱"), (0xF2C8, "藭"), (0xF2C9, "藙"),
    (0xF2CA, "藡"), (0xF2CB, "藨"), (0xF2CC, "藚"), (0xF2CD, "藗"), (0xF2CE, "藬"), (0xF2CF, "藲"), (0xF2D0, "藸"), (0xF2D1, "藘"),
    (0xF2D2, "藟"), (0xF2D3, "藣"), (0xF2D4, "藜"), (0xF2D5, "藑"), (0xF2D6, "藰"), (0xF2D7, "藦"), (0xF2D8, "藯"), (0xF2D9, "藞"),
    (0xF2DA, "藢"), (0xF2DB, "蠀"), (0xF2DC, "蟺"), (0xF2DD, "蠃"), (0xF2DE, "蟶"), (0xF2DF, "蟷"), (0xF2E0, "蠉"), (0xF2E1, "蠌"),
    (0xF2E2, "蠋"), (0xF2E3, "蠆"), (0xF2E4, "蟼"), (0xF2E5, "蠈"), (0xF2E6, "蟿"), (0xF2E7, "蠊"), (0xF2E8, "蠂"), (0xF2E9, "襢"),
    (0xF2EA, "襚"), (0xF2EB, "襛"), (0xF2EC, "襗"), (0xF2ED, "襡"), (0xF2EE, "襜"), (0xF2EF, "襘"), (0xF2F0, "襝"), (0xF2F1, "襙"),
    (0xF2F2, "覈"), (0xF2F3, "覷"), (0xF2F4, "覶"), (0xF2F5, "觶"), (0xF2F6, "譐"), (0xF2F7, "譈"), (0xF2F8, "譊"), (0xF2F9, "譀"),
    (0xF2FA, "譓"), (0xF2FB, "譖"), (0xF2FC, "譔"), (0xF2FD, "譋"), (0xF2FE, "譕"), (0xF340, "譑"), (0xF341, "譂"), (0xF342, "譒"),
    (0xF343, "譗"), (0xF344, "豃"), (0xF345, "豷"), (0xF346, "豶"), (0xF347, "貚"), (0xF348, "贆"), (0xF349, "贇"), (0xF34A, "贉"),
    (0xF34B, "趬"), (0xF34C, "趪"), (0xF34D, "趭"), (0xF34E, "趫"), (0xF34F, "蹭"), (0xF350, "蹸"), (0xF351, "蹳"), (0xF352, "蹪"),
    (0xF353, "蹯"), (0xF354, "蹻"), (0xF355, "軂"), (0xF356, "轒"), (0xF357, "轑"), (0xF358, "轏"), (0xF359, "轐"), (0xF35A, "轓"),
    (0xF35B, "辴"), (0xF35C, "酀"), (0xF35D, "鄿"), (0xF35E, "醰"), (0xF35F, "醭"), (0xF360, "鏞"), (0xF361, "鏇"), (0xF362, "鏏"),
    (0xF363, "鏂"), (0xF364, "鏚"), (0xF365, "鏐"), (0xF366, "鏹"), (0xF367, "鏬"), (0xF368, "鏌"), (0xF369, "鏙"), (0xF36A, "鎩"),
    (0xF36B, "鏦"), (0xF36C, "鏊"), (0xF36D, "鏔"), (0xF36E, "鏮"), (0xF36F, "鏣"), (0xF370, "鏕"), (0xF371, "鏄"), (0xF372, "鏎"),
    (0xF373, "鏀"), (0xF374, "鏒"), (0xF375, "鏧"), (0xF376, "镽"), (0xF377, "闚"), (0xF378, "闛"), (0xF379, "雡"), (0xF37A, "霩"),
    (0xF37B, "霫"), (0xF37C, "霬"), (0xF37D, "霨"), (0xF37E, "霦"), (0xF3A1, "鞳"), (0xF3A2, "鞷"), (0xF3A3, "鞶"), (0xF3A4, "韝"),
    (0xF3A5, "韞"), (0xF3A6, "韟"), (0xF3A7, "顜"), (0xF3A8, "顙"), (0xF3A9, "顝"), (0xF3AA, "顗"), (0xF3AB, "颿"), (0xF3AC, "颽"),
    (0xF3AD, "颻"), (0xF3AE, "颾"), (0xF3AF, "饈"), (0xF3B0, "饇"), (0xF3B1, "饃"), (0xF3B2, "馦"), (0xF3B3, "馧"), (0xF3B4, "騚"),
    (0xF3B5, "騕"), (0xF3B6, "騥"), (0xF3B7, "騝"), (0xF3B8, "騤"), (0xF3B9, "騛"), (0xF3BA, "騢"), (0xF3BB, "騠"), (0xF3BC, "騧"),
    (0xF3BD, "騣"), (0xF3BE, "騞"), (0xF3BF, "騜"), (0xF3C0, "騔"), (0xF3C1, "髂"), (0xF3C2, "鬋"), (0xF3C3, "鬊"), (0xF3C4, "鬎"),
    (0xF3C5, "鬌"), (0xF3C6, "鬷"), (0xF3C7, "鯪"), (0xF3C8, "鯫"), (0xF3C9, "鯠"), (0xF3CA, "鯞"), (0xF3CB, "鯤"), (0xF3CC, "鯦"),
    (0xF3CD, "鯢"), (0xF3CE, "鯰"), (0xF3CF, "鯔"), (0xF3D0, "鯗"), (0xF3D1, "鯬"), (0xF3D2, "鯜"), (0xF3D3, "鯙"), (0xF3D4, "鯥"),
    (0xF3D5, "鯕"), (0xF3D6, "鯡"), (0xF3D7, "鯚"), (0xF3D8, "鵷"), (0xF3D9, "鶁"), (0xF3DA, "鶊"), (0xF3DB, "鶄"), (0xF3DC, "鶈"),
    (0xF3DD, "鵱"), (0xF3DE, "鶀"), (0xF3DF, "鵸"), (0xF3E0, "鶆"), (0xF3E1, "鶋"), (0xF3E2, "鶌"), (0xF3E3, "鵽"), (0xF3E4, "鵫"),
    (0xF3E5, "鵴"), (0xF3E6, "鵵"), (0xF3E7, "鵰"), (0xF3E8, "鵩"), (0xF3E9, "鶅"), (0xF3EA, "鵳"), (0xF3EB, "鵻"), (0xF3EC, "鶂"),
    (0xF3ED, "鵯"), (0xF3EE, "鵹"), (0xF3EF, "鵿"), (0xF3F0, "鶇"), (0xF3F1, "鵨"), (0xF3F2, "麔"), (0xF3F3, "麑"), (0xF3F4, "黀"),
    (0xF3F5, "黼"), (0xF3F6, "鼭"), (0xF3F7, "齀"), (0xF3F8, "齁"), (0xF3F9, "齍"), (0xF3FA, "齖"), (0xF3FB, "齗"), (0xF3FC, "齘"),
    (0xF3FD, "匷"), (0xF3FE, "嚲"), (0xF440, "嚵"), (0xF441, "嚳"), (0xF442, "壣"), (0xF443, "孅"), (0xF444, "巆"), (0xF445, "巇"),
    (0xF446, "廮"), (0xF447, "廯"), (0xF448, "忀"), (0xF449, "忁"), (0xF44A, "懹"), (0xF44B, "攗"), (0xF44C, "攖"), (0xF44D, "攕"),
    (0xF44E, "攓"), (0xF44F, "旟"), (0xF450, "曨"), (0xF451, "曣"), (0xF452, "曤"), (0xF453, "櫳"), (0xF454, "櫰"), (0xF455, "櫪"),
    (0xF456, "櫨"), (0xF457, "櫹"), (0xF458, "櫱"), (0xF459, "櫮"), (0xF45A, "櫯"), (0xF45B, "瀼"), (0xF45C, "瀵"), (0xF45D, "瀯"),
    (0xF45E, "瀷"), (0xF45F, "瀴"), (0xF460, "瀱"), (0xF461, "灂"), (0xF462, "瀸"), (0xF463, "瀿"), (0xF464, "瀺"), (0xF465, "瀹"),
    (0xF466, "灀"), (0xF467, "瀻"), (0xF468, "瀳"), (0xF469, "灁"), (0xF46A, "爓"), (0xF46B, "爔"), (0xF46C, "犨"), (0xF46D, "獽"),
    (0xF46E, "獼"), (0xF46F, "璺"), (0xF470, "皫"), (0xF471, "皪"), (0xF472, "皾"), (0xF473, "盭"), (0xF474, "矌"), (0xF475, "矎"),
    (0xF476, "矏"), (0xF477, "矍"), (0xF478, "矲"), (0xF479, "礥"), (0xF47A, "礣"), (0xF47B, "礧"), (0xF47C, "礨"), (0xF47D, "礤"),
    (0xF47E, "礩"), (0xF4A1, "禲"), (0xF4A2, "穮"), (0xF4A3, "穬"), (0xF4A4, "穭"), (0xF4A5, "竷"), (0xF4A6, "籉"), (0xF4A7, "籈"),
    (0xF4A8, "籊"), (0xF4A9, "籇"), (0xF4AA, "籅"), (0xF4AB, "糮"), (0xF4AC, "繻"), (0xF4AD, "繾"), (0xF4AE, "纁"), (0xF4AF, "纀"),
    (0xF4B0, "羺"), (0xF4B1, "翿"), (0xF4B2, "聹"), (0xF4B3, "臛"), (0xF4B4, "臙"), (0xF4B5, "舋"), (0xF4B6, "艨"), (0xF4B7, "艩"),
    (0xF4B8, "蘢"), (0xF4B9, "藿"), (0xF4BA, "蘁"), (0xF4BB, "藾"), (0xF4BC, "蘛"), (0xF4BD, "蘀"), (0xF4BE, "藶"), (0xF4BF, "蘄"),
    (0xF4C0, "蘉"), (0xF4C1, "蘅"), (0xF4C2, "蘌"), (0xF4C3, "藽"), (0xF4C4, "蠙"), (0xF4C5, "蠐"), (0xF4C6, "蠑"), (0xF4C7, "蠗"),
    (0xF4C8, "蠓"), (0xF4C9, "蠖"), (0xF4CA, "襣"), (0xF4CB, "襦"), (0xF4CC, "覹"), (0xF4CD, "觷"), (0xF4CE, "譠"), (0xF4CF, "譪"),
    (0xF4D0, "譝"), (0xF4D1, "譨"), (0xF4D2, "譣"), (0xF4D3, "譥"), (0xF4D4, "譧"), (0xF4D5, "譭"), (0xF4D6, "趮"), (0xF4D7, "躆"),
    (0xF4D8, "躈"), (0xF4D9, "躄"), (0xF4DA, "轙"), (0xF4DB, "轖"), (0xF4DC, "轗"), (0xF4DD, "轕"), (0xF4DE, "轘"), (0xF4DF, "轚"),
    (0xF4E0, "邍"), (0xF4E1, "酃"), (0xF4E2, "酁"), (0xF4E3, "醷"), (0xF4E4, "醵"), (0xF4E5, "醲"), (0xF4E6, "醳"), (0xF4E7, "鐋"),
    (0xF4E8, "鐓"), (0xF4E9, "鏻"), (0xF4EA, "鐠"), (0xF4EB, "鐏"), (0xF4EC, "鐔"), (0xF4ED, "鏾"), (0xF4EE, "鐕"), (0xF4EF, "鐐"),
    (0xF4F0, "鐨"), (0xF4F1, "鐙"), (0xF4F2, "鐍"), (0xF4F3, "鏵"), (0xF4F4, "鐀"), (0xF4F5, "鏷"), (0xF4F6, "鐇"), (0xF4F7, "鐎"),
    (0xF4F8, "鐖"), (0xF4F9, "鐒"), (0xF4FA, "鏺"), (0xF4FB, "鐉"), (0xF4FC, "鏸"), (0xF4FD, "鐊"), (0xF4FE, "鏿"), (0xF540, "鏼"),
    (0xF541, "鐌"), (0xF542, "鏶"), (0xF543, "鐑"), (0xF544, "鐆"), (0xF545, "闞"), (0xF546, "闠"), (0xF547, "闟"), (0xF548, "霮"),
    (0xF549, "霯"), (0xF54A, "鞹"), (0xF54B, "鞻"), (0xF54C, "韽"), (0xF54D, "韾"), (0xF54E, "顠"), (0xF54F, "顢"), (0xF550, "顣"),
    (0xF551, "顟"), (0xF552, "飁"), (0xF553, "飂"), (0xF554, "饐"), (0xF555, "饎"), (0xF556, "饙"), (0xF557, "饌"), (0xF558, "饋"),
    (0xF559, "饓"), (0xF55A, "騲"), (0xF55B, "騴"), (0xF55C, "騱"), (0xF55D, "騬"), (0xF55E, "騪"), (0xF55F, "騶"), (0xF560, "騩"),
    (0xF561, "騮"), (0xF562, "騸"), (0xF563, "騭"), (0xF564, "髇"), (0xF565, "髊"), (0xF566, "髆"), (0xF567, "鬐"), (0xF568, "鬒"),
    (0xF569, "鬑"), (0xF56A, "鰋"), (0xF56B, "鰈"), (0xF56C, "鯷"), (0xF56D, "鰅"), (0xF56E, "鰒"), (0xF56F, "鯸"), (0xF570, "鱀"),
    (0xF571, "鰇"), (0xF572, "鰎"), (0xF573, "鰆"), (0xF574, "鰗"), (0xF575, "鰔"), (0xF576, "鰉"), (0xF577, "鶟"), (0xF578, "鶙"),
    (0xF579, "鶤"), (0xF57A, "鶝"), (0xF57B, "鶒"), (0xF57C, "鶘"), (0xF57D, "鶐"), (0xF57E, "鶛"), (0xF5A1, "鶠"), (0xF5A2, "鶔"),
    (0xF5A3, "鶜"), (0xF5A4, "鶪"), (0xF5A5, "鶗"), (0xF5A6, "鶡"), (0xF5A7, "鶚"), (0xF5A8, "鶢"), (0xF5A9, "鶨"), (0xF5AA, "鶞"),
    (0xF5AB, "鶣"), (0xF5AC, "鶿"), (0xF5AD, "鶩"), (0xF5AE, "鶖"), (0xF5AF, "鶦"), (0xF5B0, "鶧"), (0xF5B1, "麙"), (0xF5B2, "麛"),
    (0xF5B3, "麚"), (0xF5B4, "黥"), (0xF5B5, "黤"), (0xF5B6, "黧"), (0xF5B7, "黦"), (0xF5B8, "鼰"), (0xF5B9, "鼮"), (0xF5BA, "齛"),
    (0xF5BB, "齠"), (0xF5BC, "齞"), (0xF5BD, "齝"), (0xF5BE, "齙"), (0xF5BF, "龑"), (0xF5C0, "儺"), (0xF5C1, "儹"), (0xF5C2, "劘"),
    (0xF5C3, "劗"), (0xF5C4, "囃"), (0xF5C5, "嚽"), (0xF5C6, "嚾"), (0xF5C7, "孈"), (0xF5C8, "孇"), (0xF5C9, "巋"), (0xF5CA, "巏"),
    (0xF5CB, "廱"), (0xF5CC, "懽"), (0xF5CD, "攛"), (0xF5CE, "欂"), (0xF5CF, "櫼"), (0xF5D0, "欃"), (0xF5D1, "櫸"), (0xF5D2, "欀"),
    (0xF5D3, "灃"), (0xF5D4, "灄"), (0xF5D5, "灊"), (0xF5D6, "灈"), (0xF5D7, "灉"), (0xF5D8, "灅"), (0xF5D9, "灆"), (0xF5DA, "爝"),
    (0xF5DB, "爚"), (0xF5DC, "爙"), (0xF5DD, "獾"), (0xF5DE, "甗"), (0xF5DF, "癪"), (0xF5E0, "矐"), (0xF5E1, "礭"), (0xF5E2, "礱"),
    (0xF5E3, "礯"), (0xF5E4, "籔"), (0xF5E5, "籓"), (0xF5E6, "糲"), (0xF5E7, "纊"), (0xF5E8, "纇"), (0xF5E9, "纈"), (0xF5EA, "纋"),
    (0xF5EB, "纆"), (0xF5EC, "纍"), (0xF5ED, "罍"), (0xF5EE, "羻"), (0xF5EF, "耰"), (0xF5F0, "臝"), (0xF5F1, "蘘"), (0xF5F2, "蘪"),
    (0xF5F3, "蘦"), (0xF5F4, "蘟"), (0xF5F5, "蘣"), (0xF5F6, "蘜"), (0xF5F7, "蘙"), (0xF5F8, "蘧"), (0xF5F9, "蘮"), (0xF5FA, "蘡"),
    (0xF5FB, "蘠"), (0xF5FC, "蘩"), (0xF5FD, "蘞"), (0xF5FE, "蘥"), (0xF640, "蠩"), (0xF641, "蠝"), (0xF642, "蠛"), (0xF643, "蠠"),
    (0xF644, "蠤"), (0xF645, "蠜"), (0xF646, "蠫"), (0xF647, "衊"), (0xF648, "襭"), (0xF649, "襩"), (0xF64A, "襮"), (0xF64B, "襫"),
    (0xF64C, "觺"), (0xF64D, "譹"), (0xF64E, "譸"), (0xF64F, "譅"), (0xF650, "譺"), (0xF651, "譻"), (0xF652, "贐"), (0xF653, "贔"),
    (0xF654, "趯"), (0xF655, "躎"), (0xF656, "躌"), (0xF657, "轞"), (0xF658, "轛"), (0xF659, "轝"), (0xF65A, "酆"), (0xF65B, "酄"),
    (0xF65C, "酅"), (0xF65D, "醹"), (0xF65E, "鐿"), (0xF65F, "鐻"), (0xF660, "鐶"), (0xF661, "鐩"), (0xF662, "鐽"), (0xF663, "鐼"),
    (0xF664, "鐰"), (0xF665, "鐹"), (0xF666, "鐪"), (0xF667, "鐷"), (0xF668, "鐬"), (0xF669, "鑀"), (0xF66A, "鐱"), (0xF66B, "闥"),
    (0xF66C, "闤"), (0xF66D, "闣"), (0xF66E, "霵"), (0xF66F, "霺"), (0xF670, "鞿"), (0xF671, "韡"), (0xF672, "顤"), (0xF673, "飉"),
    (0xF674, "飆"), (0xF675, "飀"), (0xF676, "饘"), (0xF677, "饖"), (0xF678, "騹"), (0xF679, "騽"), (0xF67A, "驆"), (0xF67B, "驄"),
    (0xF67C, "驂"), (0xF67D, "驁"), (0xF67E, "騺"), (0xF6A1, "騿"), (0xF6A2, "髍"), (0xF6A3, "鬕"), (0xF6A4, "鬗"), (0xF6A5, "鬘"),
    (0xF6A6, "鬖"), (0xF6A7, "鬺"), (0xF6A8, "魒"), (0xF6A9, "鰫"), (0xF6AA, "鰝"), (0xF6AB, "鰜"), (0xF6AC, "鰬"), (0xF6AD, "鰣"),
    (0xF6AE, "鰨"), (0xF6AF, "鰩"), (0xF6B0, "鰤"), (0xF6B1, "鰡"), (0xF6B2, "鶷"), (0xF6B3, "鶶"), (0xF6B4, "鶼"), (0xF6B5, "鷁"),
    (0xF6B6, "鷇"), (0xF6B7, "鷊"), (0xF6B8, "鷏"), (0xF6B9, "鶾"), (0xF6BA, "鷅"), (0xF6BB, "鷃"), (0xF6BC, "鶻"), (0xF6BD, "鶵"),
    (0xF6BE, "鷎"), (0xF6BF, "鶹"), (0xF6C0, "鶺"), (0xF6C1, "鶬"), (0xF6C2, "鷈"), (0xF6C3, "鶱"), (0xF6C4, "鶭"), (0xF6C5, "鷌"),
    (0xF6C6, "鶳"), (0xF6C7, "鷍"), (0xF6C8, "鶲"), (0xF6C9, "鹺"), (0xF6CA, "麜"), (0xF6CB, "黫"), (0xF6CC, "黮"), (0xF6CD, "黭"),
    (0xF6CE, "鼛"), (0xF6CF, "鼘"), (0xF6D0, "鼚"), (0xF6D1, "鼱"), (0xF6D2, "齎"), (0xF6D3, "齥"), (0xF6D4, "齤"), (0xF6D5, "龒"),
    (0xF6D6, "亹"), (0xF6D7, "囆"), (0xF6D8, "囅"), (0xF6D9, "囋"), (0xF6DA, "奱"), (0xF6DB, "孋"), (0xF6DC, "孌"), (0xF6DD, "巕"),
    (0xF6DE, "巑"), (0xF6DF, "廲"), (0xF6E0, "攡"), (0xF6E1, "攠"), (0xF6E2, "攦"), (0xF6E3, "攢"), (0xF6E4, "欋"), (0xF6E5, "欈"),
    (0xF6E6, "欉"), (0xF6E7, "氍"), (0xF6E8, "灕"), (0xF6E9, "灖"), (0xF6EA, "灗"), (0xF6EB, "灒"), (0xF6EC, "爞"), (0xF6ED, "爟"),
    (0xF6EE, "犩"), (0xF6EF, "獿"), (0xF6F0, "瓘"), (0xF6F1, "瓕"), (0xF6F2, "瓙"), (0xF6F3, "瓗"), (0xF6F4, "癭"), (0xF6F5, "皭"),
    (0xF6F6, "礵"), (0xF6F7, "禴"), (0xF6F8, "穰"), (0xF6F9, "穱"), (0xF6FA, "籗"), (0xF6FB, "籜"), (0xF6FC, "籙"), (0xF6FD, "籛"),
    (0xF6FE, "籚"), (0xF740, "糴"), (0xF741, "糱"), (0xF742, "纑"), (0xF743, "罏"), (0xF744, "羇"), (0xF745, "臞"), (0xF746, "艫"),
    (0xF747, "蘴"), (0xF748, "蘵"), (0xF749, "蘳"), (0xF74A, "蘬"), (0xF74B, "蘲"), (0xF74C, "蘶"), (0xF74D, "蠬"), (0xF74E, "蠨"),
    (0xF74F, "蠦"), (0xF750, "蠪"), (0xF751, "蠥"), (0xF752, "襱"), (0xF753, "覿"), (0xF754, "覾"), (0xF755, "觻"), (0xF756, "譾"),
    (0xF757, "讄"), (0xF758, "讂"), (0xF759, "讆"), (0xF75A, "讅"), (0xF75B, "譿"), (0xF75C, "贕"), (0xF75D, "躕"), (0xF75E, "躔"),
    (0xF75F, "躚"), (0xF760, "躒"), (0xF761, "躐"), (0xF762, "躖"), (0xF763, "躗"), (0xF764, "轠"), (0xF765, "轢"), (0xF766, "酇"),
    (0xF767, "鑌"), (0xF768, "鑐"), (0xF769, "鑊"), (0xF76A, "鑋"), (0xF76B, "鑏"), (0xF76C, "鑇"), (0xF76D, "鑅"), (0xF76E, "鑈"),
    (0xF76F, "鑉"), (0xF770, "鑆"), (0xF771, "霿"), (0xF772, "韣"), (0xF773, "顪"), (0xF774, "顩"), (0xF775, "飋"), (0xF776, "饔"),
    (0xF777, "饛"), (0xF778, "驎"), (0xF779, "驓"), (0xF77A, "驔"), (0xF77B, "驌"), (0xF77C, "驏"), (0xF77D, "驈"), (0xF77E, "驊"),
    (0xF7A1, "驉"), (0xF7A2, "驒"), (0xF7A3, "驐"), (0xF7A4, "髐"), (0xF7A5, "鬙"), (0xF7A6, "鬫"), (0xF7A7, "鬻"), (0xF7A8, "魖"),
    (0xF7A9, "魕"), (0xF7AA, "鱆"), (0xF7AB, "鱈"), (0xF7AC, "鰿"), (0xF7AD, "鱄"), (0xF7AE, "鰹"), (0xF7AF, "鰳"), (0xF7B0, "鱁"),
    (0xF7B1, "鰼"), (0xF7B2, "鰷"), (0xF7B3, "鰴"), (0xF7B4, "鰲"), (0xF7B5, "鰽"), (0xF7B6, "鰶"), (0xF7B7, "鷛"), (0xF7B8, "鷒"),
    (0xF7B9, "鷞"), (0xF7BA, "鷚"), (0xF7BB, "鷋"), (0xF7BC, "鷐"), (0xF7BD, "鷜"), (0xF7BE, "鷑"), (0xF7BF, "鷟"), (0xF7C0, "鷩"),
    (0xF7C1, "鷙"), (0xF7C2, "鷘"), (0xF7C3, "鷖"), (0xF7C4, "鷵"), (0xF7C5, "鷕"), (0xF7C6, "鷝"), (0xF7C7, "麶"), (0xF7C8, "黰"),
    (0xF7C9, "鼵"), (0xF7CA, "鼳"), (0xF7CB, "鼲"), (0xF7CC, "齂"), (0xF7CD, "齫"), (0xF7CE, "龕"), (0xF7CF, "龢"), (0xF7D0, "儽"),
    (0xF7D1, "劙"), (0xF7D2, "壨"), (0xF7D3, "壧"), (0xF7D4, "奲"), (0xF7D5, "孍"), (0xF7D6, "巘"), (0xF7D7, "蠯"), (0xF7D8, "彏"),
    (0xF7D9, "戁"), (0xF7DA, "戃"), (0xF7DB, "戄"), (0xF7DC, "攩"), (0xF7DD, "攥"), (0xF7DE, "斖"), (0xF7DF, "曫"), (0xF7E0, "欑"),
    (0xF7E1, "欒"), (0xF7E2, "欏"), (0xF7E3, "毊"), (0xF7E4, "灛"), (0xF7E5, "灚"), (0xF7E6, "爢"), (0xF7E7, "玂"), (0xF7E8, "玁"),
    (0xF7E9, "玃"), (0xF7EA, "癰"), (0xF7EB, "矔"), (0xF7EC, "籧"), (0xF7ED, "籦"), (0xF7EE, "纕"), (0xF7EF, "艬"), (0xF7F0, "蘺"),
    (0xF7F1, "虀"), (0xF7F2, "蘹"), (0xF7F3, "蘼"), (0xF7F4, "蘱"), (0xF7F5, "蘻"), (0xF7F6, "蘾"), (0xF7F7, "蠰"), (0xF7F8, "蠲"),
    (0xF7F9, "蠮"), (0xF7FA, "蠳"), (0xF7FB, "襶"), (0xF7FC, "襴"), (0xF7FD, "襳"), (0xF7FE, "觾"), (0xF840, "讌"), (0xF841, "讎"),
    (0xF842, "讋"), (0xF843, "讈"), (0xF844, "豅"), (0xF845, "贙"), (0xF846, "躘"), (0xF847, "轤"), (0xF848, "轣"), (0xF849, "醼"),
    (0xF84A, "鑢"), (0xF84B, "鑕"), (0xF84C, "鑝"), (0xF84D, "鑗"), (0xF84E, "鑞"), (0xF84F, "韄"), (0xF850, "韅"), (0xF851, "頀"),
    (0xF852, "驖"), (0xF853, "驙"), (0xF854, "鬞"), (0xF855, "鬟"), (0xF856, "鬠"), (0xF857, "鱒"), (0xF858, "鱘"), (0xF859, "鱐"),
    (0xF85A, "鱊"), (0xF85B, "鱍"), (0xF85C, "鱋"), (0xF85D, "鱕"), (0xF85E, "鱙"), (0xF85F, "鱌"), (0xF860, "鱎"), (0xF861, "鷻"),
    (0xF862, "鷷"), (0xF863, "鷯"), (0xF864, "鷣"), (0xF865, "鷫"), (0xF866, "鷸"), (0xF867, "鷤"), (0xF868, "鷶"), (0xF869, "鷡"),
    (0xF86A, "鷮"), (0xF86B, "鷦"), (0xF86C, "鷲"), (0xF86D, "鷰"), (0xF86E, "鷢"), (0xF86F, "鷬"), (0xF870, "鷴"), (0xF871, "鷳"),
    (0xF872, "鷨"), (0xF873, "鷭"), (0xF874, "黂"), (0xF875, "黐"), (0xF876, "黲"), (0xF877, "黳"), (0xF878, "鼆"), (0xF879, "鼜"),
    (0xF87A, "鼸"), (0xF87B, "鼷"), (0xF87C, "鼶"), (0xF87D, "齃"), (0xF87E, "齏"), (0xF8A1, "齱"), (0xF8A2, "齰"), (0xF8A3, "齮"),
    (0xF8A4, "齯"), (0xF8A5, "囓"), (0xF8A6, "囍"), (0xF8A7, "孎"), (0xF8A8, "屭"), (0xF8A9, "攭"), (0xF8AA, "曭"), (0xF8AB, "曮"),
    (0xF8AC, "欓"), (0xF8AD, "灟"), (0xF8AE, "灡"), (0xF8AF, "灝"), (0xF8B0, "灠"), (0xF8B1, "爣"), (0xF8B2, "瓛"), (0xF8B3, "瓥"),
    (0xF8B4, "矕"), (0xF8B5, "礸"), (0xF8B6, "禷"), (0xF8B7, "禶"), (0xF8B8, "籪"), (0xF8B9, "纗"), (0xF8BA, "羉"), (0xF8BB, "艭"),
    (0xF8BC, "虃"), (0xF8BD, "蠸"), (0xF8BE, "蠷"), (0xF8BF, "蠵"), (0xF8C0, "衋"), (0xF8C1, "讔"), (0xF8C2, "讕"), (0xF8C3, "躞"),
    (0xF8C4, "躟"), (0xF8C5, "躠"), (0xF8C6, "躝"), (0xF8C7, "醾"), (0xF8C8, "醽"), (0xF8C9, "釂"), (0xF8CA, "鑫"), (0xF8CB, "鑨"),
    (0xF8CC, "鑩"), (0xF8CD, "雥"), (0xF8CE, "靆"), (0xF8CF, "靃"), (0xF8D0, "靇"), (0xF8D1, "韇"), (0xF8D2, "韥"), (0xF8D3, "驞"),
    (0xF8D4, "髕"), (0xF8D5, "魙"), (0xF8D6, "鱣"), (0xF8D7, "鱧"), (0xF8D8, "鱦"), (0xF8D9, "鱢"), (0xF8DA, "鱞"), (0xF8DB, "鱠"),
    (0xF8DC, "鸂"), (0xF8DD, "鷾"), (0xF8DE, "鸇"), (0xF8DF, "鸃"), (0xF8E0, "鸆"), (0xF8E1, "鸅"), (0xF8E2, "鸀"), (0xF8E3, "鸁"),
    (0xF8E4, "鸉"), (0xF8E5, "鷿"), (0xF8E6, "鷽"), (0xF8E7, "鸄"), (0xF8E8, "麠"), (0xF8E9, "鼞"), (0xF8EA, "齆"), (0xF8EB, "齴"),
    (0xF8EC, "齵"), (0xF8ED, "齶"), (0xF8EE, "囔"), (0xF8EF, "攮"), (0xF8F0, "斸"), (0xF8F1, "欘"), (0xF8F2, "欙"), (0xF8F3, "欗"),
    (0xF8F4, "欚"), (0xF8F5, "灢"), (0xF8F6, "爦"), (0xF8F7, "犪"), (0xF8F8, "矘"), (0xF8F9, "矙"), (0xF8FA, "礹"), (0xF8FB, "籩"),
    (0xF8FC, "籫"), (0xF8FD, "糶"), (0xF8FE, "纚"), (0xF940, "纘"), (0xF941, "纛"), (0xF942, "纙"), (0xF943, "臠"), (0xF944, "臡"),
    (0xF945, "虆"), (0xF946, "虇"), (0xF947, "虈"), (0xF948, "襹"), (0xF949, "襺"), (0xF94A, "襼"), (0xF94B, "襻"), (0xF94C, "觿"),
    (0xF94D, "讘"), (0xF94E, "讙"), (0xF94F, "躥"), (0xF950, "躤"), (0xF951, "躣"), (0xF952, "鑮"), (0xF953, "鑭"), (0xF954, "鑯"),
    (0xF955, "鑱"), (0xF956, "鑳"), (0xF957, "靉"), (0xF958, "顲"), (0xF959, "饟"), (0xF95A, "鱨"), (0xF95B, "鱮"), (0xF95C, "鱭"),
    (0xF95D, "鸋"), (0xF95E, "鸍"), (0xF95F, "鸐"), (0xF960, "鸏"), (0xF961, "鸒"), (0xF962, "鸑"), (0xF963, "麡"), (0xF964, "黵"),
    (0xF965, "鼉"), (0xF966, "齇"), (0xF967, "齸"), (0xF968, "齻"), (0xF969, "齺"), (0xF96A, "齹"), (0xF96B, "圞"), (0xF96C, "灦"),
    (0xF96D, "籯"), (0xF96E, "蠼"), (0xF96F, "趲"), (0xF970, "躦"), (0xF971, "釃"), (0xF972, "鑴"), (0xF973, "鑸"), (0xF974, "鑶"),
    (0xF975, "鑵"), (0xF976, "驠"), (0xF977, "鱴"), (0xF978, "鱳"), (0xF979, "鱱"), (0xF97A, "鱵"), (0xF97B, "鸔"), (0xF97C, "鸓"),
    (0xF97D, "黶"), (0xF97E, "鼊"), (0xF9A1, "龤"), (0xF9A2, "灨"), (0xF9A3, "灥"), (0xF9A4, "糷"), (0xF9A5, "虪"), (0xF9A6, "蠾"),
    (0xF9A7, "蠽"), (0xF9A8, "蠿"), (0xF9A9, "讞"), (0xF9AA, "貜"), (0xF9AB, "躩"), (0xF9AC, "軉"), (0xF9AD, "靋"), (0xF9AE, "顳"),
    (0xF9AF, "顴"), (0xF9B0, "飌"), (0xF9B1, "饡"), (0xF9B2, "馫"), (0xF9B3, "驤"), (0xF9B4, "驦"), (0xF9B5, "驧"), (0xF9B6, "鬤"),
    (0xF9B7, "鸕"), (0xF9B8, "鸗"), (0xF9B9, "齈"), (0xF9BA, "戇"), (0xF9BB, "欞"), (0xF9BC, "爧"), (0xF9BD, "虌"), (0xF9BE, "躨"),
    (0xF9BF, "钂"), (0xF9C0, "钀"), (0xF9C1, "钁"), (0xF9C2, "驩"), (0xF9C3, "驨"), (0xF9C4, "鬮"), (0xF9C5, "鸙"), (0xF9C6, "爩"),
    (0xF9C7, "虋"), (0xF9C8, "讟"), (0xF9C9, "钃"), (0xF9CA, "鱹"), (0xF9CB, "麷"), (0xF9CC, "癵"), (0xF9CD, "驫"), (0xF9CE, "鱺"),
    (0xF9CF, "鸝"), (0xF9D0, "灩"), (0xF9D1, "灪"), (0xF9D2, "麤"), (0xF9D3, "齾"), (0xF9D4, "齉"), (0xF9D5, "龘"), (0xF9D6, "碁"),
    (0xF9D7, "銹"), (0xF9D8, "裏"), (0xF9D9, "墻"), (0xF9DA, "恒"), (0xF9DB, "粧"), (0xF9DC, "嫺"), (0xF9DD, "╔"), (0xF9DE, "╦"),
    (0xF9DF, "╗"), (0xF9E0, "╠"), (0xF9E1, "╬"), (0xF9E2, "╣"), (0xF9E3, "╚"), (0xF9E4, "╩"), (0xF9E5, "╝"), (0xF9E6, "╒"),
    (0xF9E7, "╤"), (0xF9E8, "╕"), (0xF9E9, "╞"), (0xF9EA, "╪"), (0xF9EB, "╡"), (0xF9EC, "╘"), (0xF9ED, "╧"), (0xF9EE, "╛"),
    (0xF9EF, "╓"), (0xF9F0, "╥"), (0xF9F1, "╖"), (0xF9F2, "╟"), (0xF9F3, "╫"), (0xF9F4, "╢"), (0xF9F5, "╙"), (0xF9F6, "╨"),
    (0xF9F7, "╜"), (0xF9F8, "║"), (0xF9F9, "═"), (0xF9FA, "╭"), (0xF9FB, "╮"), (0xF9FC, "╰"), (0xF9FD, "╯"), (0xF9FE, "▓"),
];
