//! NetFlow version 9 field type definitions, RFC 3954 section 8.
//!
//! Counters marked as `N` in the RFC default to 4 bytes, exporters may
//! declare 8 bytes in their templates.

use crate::Element;
use crate::Kind::*;

pub const IN_BYTES: u16 = 1;
pub const IN_PKTS: u16 = 2;
pub const FLOWS: u16 = 3;
pub const PROTOCOL: u16 = 4;
pub const SRC_TOS: u16 = 5;
pub const TCP_FLAGS: u16 = 6;
pub const L4_SRC_PORT: u16 = 7;
pub const IPV4_SRC_ADDR: u16 = 8;
pub const SRC_MASK: u16 = 9;
pub const INPUT_SNMP: u16 = 10;
pub const L4_DST_PORT: u16 = 11;
pub const IPV4_DST_ADDR: u16 = 12;
pub const DST_MASK: u16 = 13;
pub const OUTPUT_SNMP: u16 = 14;
pub const IPV4_NEXT_HOP: u16 = 15;
pub const SRC_AS: u16 = 16;
pub const DST_AS: u16 = 17;
pub const BGP_IPV4_NEXT_HOP: u16 = 18;
pub const LAST_SWITCHED: u16 = 21;
pub const FIRST_SWITCHED: u16 = 22;
pub const OUT_BYTES: u16 = 23;
pub const OUT_PKTS: u16 = 24;
pub const IPV6_SRC_ADDR: u16 = 27;
pub const IPV6_DST_ADDR: u16 = 28;
pub const SAMPLING_INTERVAL: u16 = 34;
pub const SAMPLING_ALGORITHM: u16 = 35;
pub const IN_SRC_MAC: u16 = 56;
pub const OUT_DST_MAC: u16 = 57;
pub const SRC_VLAN: u16 = 58;
pub const DST_VLAN: u16 = 59;
pub const IP_PROTOCOL_VERSION: u16 = 60;
pub const DIRECTION: u16 = 61;
pub const IF_NAME: u16 = 82;
pub const IF_DESC: u16 = 83;
pub const SAMPLER_NAME: u16 = 84;

// Scope field types, only valid inside options templates.
pub const SCOPE_SYSTEM: u16 = 1;
pub const SCOPE_INTERFACE: u16 = 2;
pub const SCOPE_LINE_CARD: u16 = 3;
pub const SCOPE_CACHE: u16 = 4;
pub const SCOPE_TEMPLATE: u16 = 5;

pub(crate) static FIELDS: &[Element] = &[
    Element::fixed(IN_BYTES, "IN_BYTES", 4, Unsigned),
    Element::fixed(IN_PKTS, "IN_PKTS", 4, Unsigned),
    Element::fixed(FLOWS, "FLOWS", 4, Unsigned),
    Element::fixed(PROTOCOL, "PROTOCOL", 1, Unsigned),
    Element::fixed(SRC_TOS, "SRC_TOS", 1, Unsigned),
    Element::fixed(TCP_FLAGS, "TCP_FLAGS", 1, Unsigned),
    Element::fixed(L4_SRC_PORT, "L4_SRC_PORT", 2, Unsigned),
    Element::fixed(IPV4_SRC_ADDR, "IPV4_SRC_ADDR", 4, Ipv4Address),
    Element::fixed(SRC_MASK, "SRC_MASK", 1, Unsigned),
    Element::fixed(INPUT_SNMP, "INPUT_SNMP", 2, Unsigned),
    Element::fixed(L4_DST_PORT, "L4_DST_PORT", 2, Unsigned),
    Element::fixed(IPV4_DST_ADDR, "IPV4_DST_ADDR", 4, Ipv4Address),
    Element::fixed(DST_MASK, "DST_MASK", 1, Unsigned),
    Element::fixed(OUTPUT_SNMP, "OUTPUT_SNMP", 2, Unsigned),
    Element::fixed(IPV4_NEXT_HOP, "IPV4_NEXT_HOP", 4, Ipv4Address),
    Element::fixed(SRC_AS, "SRC_AS", 2, Unsigned),
    Element::fixed(DST_AS, "DST_AS", 2, Unsigned),
    Element::fixed(BGP_IPV4_NEXT_HOP, "BGP_IPV4_NEXT_HOP", 4, Ipv4Address),
    Element::fixed(19, "MUL_DST_PKTS", 4, Unsigned),
    Element::fixed(20, "MUL_DST_BYTES", 4, Unsigned),
    Element::fixed(LAST_SWITCHED, "LAST_SWITCHED", 4, Unsigned),
    Element::fixed(FIRST_SWITCHED, "FIRST_SWITCHED", 4, Unsigned),
    Element::fixed(OUT_BYTES, "OUT_BYTES", 4, Unsigned),
    Element::fixed(OUT_PKTS, "OUT_PKTS", 4, Unsigned),
    Element::fixed(25, "MIN_PKT_LNGTH", 2, Unsigned),
    Element::fixed(26, "MAX_PKT_LNGTH", 2, Unsigned),
    Element::fixed(IPV6_SRC_ADDR, "IPV6_SRC_ADDR", 16, Ipv6Address),
    Element::fixed(IPV6_DST_ADDR, "IPV6_DST_ADDR", 16, Ipv6Address),
    Element::fixed(29, "IPV6_SRC_MASK", 1, Unsigned),
    Element::fixed(30, "IPV6_DST_MASK", 1, Unsigned),
    Element::fixed(31, "IPV6_FLOW_LABEL", 3, Octets),
    Element::fixed(32, "ICMP_TYPE", 2, Unsigned),
    Element::fixed(33, "MUL_IGMP_TYPE", 1, Unsigned),
    Element::fixed(SAMPLING_INTERVAL, "SAMPLING_INTERVAL", 4, Unsigned),
    Element::fixed(SAMPLING_ALGORITHM, "SAMPLING_ALGORITHM", 1, Unsigned),
    Element::fixed(36, "FLOW_ACTIVE_TIMEOUT", 2, Unsigned),
    Element::fixed(37, "FLOW_INACTIVE_TIMEOUT", 2, Unsigned),
    Element::fixed(38, "ENGINE_TYPE", 1, Unsigned),
    Element::fixed(39, "ENGINE_ID", 1, Unsigned),
    Element::fixed(40, "TOTAL_BYTES_EXP", 4, Unsigned),
    Element::fixed(41, "TOTAL_PKTS_EXP", 4, Unsigned),
    Element::fixed(42, "TOTAL_FLOWS_EXP", 4, Unsigned),
    Element::fixed(44, "IPV4_SRC_PREFIX", 4, Ipv4Address),
    Element::fixed(45, "IPV4_DST_PREFIX", 4, Ipv4Address),
    Element::fixed(46, "MPLS_TOP_LABEL_TYPE", 1, Unsigned),
    Element::fixed(47, "MPLS_TOP_LABEL_IP_ADDR", 4, Ipv4Address),
    Element::fixed(48, "FLOW_SAMPLER_ID", 1, Unsigned),
    Element::fixed(49, "FLOW_SAMPLER_MODE", 1, Unsigned),
    Element::fixed(50, "FLOW_SAMPLER_RANDOM_INTERVAL", 4, Unsigned),
    Element::fixed(52, "MIN_TTL", 1, Unsigned),
    Element::fixed(53, "MAX_TTL", 1, Unsigned),
    Element::fixed(54, "IPV4_IDENT", 2, Unsigned),
    Element::fixed(55, "DST_TOS", 1, Unsigned),
    Element::fixed(IN_SRC_MAC, "IN_SRC_MAC", 6, MacAddress),
    Element::fixed(OUT_DST_MAC, "OUT_DST_MAC", 6, MacAddress),
    Element::fixed(SRC_VLAN, "SRC_VLAN", 2, Unsigned),
    Element::fixed(DST_VLAN, "DST_VLAN", 2, Unsigned),
    Element::fixed(IP_PROTOCOL_VERSION, "IP_PROTOCOL_VERSION", 1, Unsigned),
    Element::fixed(DIRECTION, "DIRECTION", 1, Unsigned),
    Element::fixed(62, "IPV6_NEXT_HOP", 16, Ipv6Address),
    Element::fixed(63, "BPG_IPV6_NEXT_HOP", 16, Ipv6Address),
    Element::fixed(64, "IPV6_OPTION_HEADERS", 4, Unsigned),
    Element::fixed(70, "MPLS_LABEL_1", 3, Octets),
    Element::fixed(71, "MPLS_LABEL_2", 3, Octets),
    Element::fixed(72, "MPLS_LABEL_3", 3, Octets),
    Element::fixed(73, "MPLS_LABEL_4", 3, Octets),
    Element::fixed(74, "MPLS_LABEL_5", 3, Octets),
    Element::fixed(75, "MPLS_LABEL_6", 3, Octets),
    Element::fixed(76, "MPLS_LABEL_7", 3, Octets),
    Element::fixed(77, "MPLS_LABEL_8", 3, Octets),
    Element::fixed(78, "MPLS_LABEL_9", 3, Octets),
    Element::fixed(79, "MPLS_LABEL_10", 3, Octets),
    Element::fixed(80, "IN_DST_MAC", 6, MacAddress),
    Element::fixed(81, "OUT_SRC_MAC", 6, MacAddress),
    Element::variable(IF_NAME, "IF_NAME", String),
    Element::variable(IF_DESC, "IF_DESC", String),
    Element::variable(SAMPLER_NAME, "SAMPLER_NAME", String),
    Element::fixed(85, "IN_PERMANENT_BYTES", 4, Unsigned),
    Element::fixed(86, "IN_PERMANENT_PKTS", 4, Unsigned),
    Element::fixed(88, "FRAGMENT_OFFSET", 2, Unsigned),
    Element::fixed(89, "FORWARDING_STATUS", 1, Unsigned),
    Element::fixed(90, "MPLS_PAL_RD", 8, Octets),
    Element::fixed(91, "MPLS_PREFIX_LEN", 1, Unsigned),
    Element::fixed(92, "SRC_TRAFFIC_INDEX", 4, Unsigned),
    Element::fixed(93, "DST_TRAFFIC_INDEX", 4, Unsigned),
    Element::variable(94, "APPLICATION_DESCRIPTION", String),
    Element::variable(95, "APPLICATION_TAG", Octets),
    Element::variable(96, "APPLICATION_NAME", String),
    Element::fixed(98, "POST_IP_DIFF_SERV_CODE_POINT", 1, Unsigned),
    Element::fixed(99, "REPLICATION_FACTOR", 4, Unsigned),
    Element::fixed(102, "LAYER2_PACKET_SECTION_OFFSET", 2, Unsigned),
    Element::fixed(103, "LAYER2_PACKET_SECTION_SIZE", 2, Unsigned),
    Element::variable(104, "LAYER2_PACKET_SECTION_DATA", Octets),
];

pub(crate) static SCOPES: &[Element] = &[
    Element::fixed(SCOPE_SYSTEM, "System", 4, Unsigned),
    Element::fixed(SCOPE_INTERFACE, "Interface", 4, Unsigned),
    Element::fixed(SCOPE_LINE_CARD, "LineCard", 4, Unsigned),
    Element::fixed(SCOPE_CACHE, "Cache", 4, Unsigned),
    Element::fixed(SCOPE_TEMPLATE, "Template", 2, Unsigned),
];
