//! IANA IPFIX information elements.
//!
//! https://www.iana.org/assignments/ipfix/ipfix.xhtml
//!
//! Only elements that exporters are known to send are listed, anything else
//! is resolved as raw octets by the decoder.

use crate::Element;
use crate::Kind::*;

pub const OCTET_DELTA_COUNT: u16 = 1;
pub const PACKET_DELTA_COUNT: u16 = 2;
pub const PROTOCOL_IDENTIFIER: u16 = 4;
pub const SOURCE_TRANSPORT_PORT: u16 = 7;
pub const SOURCE_IPV4_ADDRESS: u16 = 8;
pub const INGRESS_INTERFACE: u16 = 10;
pub const DESTINATION_TRANSPORT_PORT: u16 = 11;
pub const DESTINATION_IPV4_ADDRESS: u16 = 12;
pub const EGRESS_INTERFACE: u16 = 14;
pub const SOURCE_IPV6_ADDRESS: u16 = 27;
pub const DESTINATION_IPV6_ADDRESS: u16 = 28;
pub const SAMPLING_INTERVAL: u16 = 34;
pub const SAMPLING_ALGORITHM: u16 = 35;
pub const SOURCE_MAC_ADDRESS: u16 = 56;
pub const INTERFACE_NAME: u16 = 82;
pub const EXPORTING_PROCESS_ID: u16 = 144;
pub const FLOW_START_MILLISECONDS: u16 = 152;
pub const FLOW_END_MILLISECONDS: u16 = 153;
pub const DATA_RECORDS_RELIABILITY: u16 = 276;
pub const SAMPLING_PROBABILITY: u16 = 311;

pub(crate) static ELEMENTS: &[Element] = &[
    Element::fixed(1, "octetDeltaCount", 8, Unsigned),
    Element::fixed(2, "packetDeltaCount", 8, Unsigned),
    Element::fixed(3, "deltaFlowCount", 8, Unsigned),
    Element::fixed(4, "protocolIdentifier", 1, Unsigned),
    Element::fixed(5, "ipClassOfService", 1, Unsigned),
    Element::fixed(6, "tcpControlBits", 2, Unsigned),
    Element::fixed(7, "sourceTransportPort", 2, Unsigned),
    Element::fixed(8, "sourceIPv4Address", 4, Ipv4Address),
    Element::fixed(9, "sourceIPv4PrefixLength", 1, Unsigned),
    Element::fixed(10, "ingressInterface", 4, Unsigned),
    Element::fixed(11, "destinationTransportPort", 2, Unsigned),
    Element::fixed(12, "destinationIPv4Address", 4, Ipv4Address),
    Element::fixed(13, "destinationIPv4PrefixLength", 1, Unsigned),
    Element::fixed(14, "egressInterface", 4, Unsigned),
    Element::fixed(15, "ipNextHopIPv4Address", 4, Ipv4Address),
    Element::fixed(16, "bgpSourceAsNumber", 4, Unsigned),
    Element::fixed(17, "bgpDestinationAsNumber", 4, Unsigned),
    Element::fixed(18, "bgpNextHopIPv4Address", 4, Ipv4Address),
    Element::fixed(19, "postMCastPacketDeltaCount", 8, Unsigned),
    Element::fixed(20, "postMCastOctetDeltaCount", 8, Unsigned),
    Element::fixed(21, "flowEndSysUpTime", 4, Unsigned),
    Element::fixed(22, "flowStartSysUpTime", 4, Unsigned),
    Element::fixed(23, "postOctetDeltaCount", 8, Unsigned),
    Element::fixed(24, "postPacketDeltaCount", 8, Unsigned),
    Element::fixed(25, "minimumIpTotalLength", 8, Unsigned),
    Element::fixed(26, "maximumIpTotalLength", 8, Unsigned),
    Element::fixed(27, "sourceIPv6Address", 16, Ipv6Address),
    Element::fixed(28, "destinationIPv6Address", 16, Ipv6Address),
    Element::fixed(29, "sourceIPv6PrefixLength", 1, Unsigned),
    Element::fixed(30, "destinationIPv6PrefixLength", 1, Unsigned),
    Element::fixed(31, "flowLabelIPv6", 4, Unsigned),
    Element::fixed(32, "icmpTypeCodeIPv4", 2, Unsigned),
    Element::fixed(33, "igmpType", 1, Unsigned),
    Element::fixed(34, "samplingInterval", 4, Unsigned),
    Element::fixed(35, "samplingAlgorithm", 1, Unsigned),
    Element::fixed(36, "flowActiveTimeout", 2, Unsigned),
    Element::fixed(37, "flowIdleTimeout", 2, Unsigned),
    Element::fixed(38, "engineType", 1, Unsigned),
    Element::fixed(39, "engineId", 1, Unsigned),
    Element::fixed(40, "exportedOctetTotalCount", 8, Unsigned),
    Element::fixed(41, "exportedMessageTotalCount", 8, Unsigned),
    Element::fixed(42, "exportedFlowRecordTotalCount", 8, Unsigned),
    Element::fixed(43, "ipv4RouterSc", 4, Ipv4Address),
    Element::fixed(44, "sourceIPv4Prefix", 4, Ipv4Address),
    Element::fixed(45, "destinationIPv4Prefix", 4, Ipv4Address),
    Element::fixed(46, "mplsTopLabelType", 1, Unsigned),
    Element::fixed(47, "mplsTopLabelIPv4Address", 4, Ipv4Address),
    Element::fixed(48, "samplerId", 1, Unsigned),
    Element::fixed(49, "samplerMode", 1, Unsigned),
    Element::fixed(50, "samplerRandomInterval", 4, Unsigned),
    Element::fixed(51, "classId", 1, Unsigned),
    Element::fixed(52, "minimumTTL", 1, Unsigned),
    Element::fixed(53, "maximumTTL", 1, Unsigned),
    Element::fixed(54, "fragmentIdentification", 4, Unsigned),
    Element::fixed(55, "postIpClassOfService", 1, Unsigned),
    Element::fixed(56, "sourceMacAddress", 6, MacAddress),
    Element::fixed(57, "postDestinationMacAddress", 6, MacAddress),
    Element::fixed(58, "vlanId", 2, Unsigned),
    Element::fixed(59, "postVlanId", 2, Unsigned),
    Element::fixed(60, "ipVersion", 1, Unsigned),
    Element::fixed(61, "flowDirection", 1, Unsigned),
    Element::fixed(62, "ipNextHopIPv6Address", 16, Ipv6Address),
    Element::fixed(63, "bgpNextHopIPv6Address", 16, Ipv6Address),
    Element::fixed(64, "ipv6ExtensionHeaders", 4, Unsigned),
    Element::fixed(70, "mplsTopLabelStackSection", 3, Octets),
    Element::fixed(71, "mplsLabelStackSection2", 3, Octets),
    Element::fixed(72, "mplsLabelStackSection3", 3, Octets),
    Element::fixed(73, "mplsLabelStackSection4", 3, Octets),
    Element::fixed(74, "mplsLabelStackSection5", 3, Octets),
    Element::fixed(75, "mplsLabelStackSection6", 3, Octets),
    Element::fixed(76, "mplsLabelStackSection7", 3, Octets),
    Element::fixed(77, "mplsLabelStackSection8", 3, Octets),
    Element::fixed(78, "mplsLabelStackSection9", 3, Octets),
    Element::fixed(79, "mplsLabelStackSection10", 3, Octets),
    Element::fixed(80, "destinationMacAddress", 6, MacAddress),
    Element::fixed(81, "postSourceMacAddress", 6, MacAddress),
    Element::variable(82, "interfaceName", String),
    Element::variable(83, "interfaceDescription", String),
    Element::variable(84, "samplerName", String),
    Element::fixed(85, "octetTotalCount", 8, Unsigned),
    Element::fixed(86, "packetTotalCount", 8, Unsigned),
    Element::fixed(87, "flagsAndSamplerId", 4, Unsigned),
    Element::fixed(88, "fragmentOffset", 2, Unsigned),
    Element::fixed(89, "forwardingStatus", 4, Unsigned),
    Element::fixed(90, "mplsVpnRouteDistinguisher", 8, Octets),
    Element::fixed(91, "mplsTopLabelPrefixLength", 1, Unsigned),
    Element::fixed(92, "srcTrafficIndex", 4, Unsigned),
    Element::fixed(93, "dstTrafficIndex", 4, Unsigned),
    Element::variable(94, "applicationDescription", String),
    Element::variable(95, "applicationId", Octets),
    Element::variable(96, "applicationName", String),
    Element::fixed(98, "postIpDiffServCodePoint", 1, Unsigned),
    Element::fixed(99, "multicastReplicationFactor", 4, Unsigned),
    Element::variable(100, "className", String),
    Element::fixed(101, "classificationEngineId", 1, Unsigned),
    Element::fixed(102, "layer2packetSectionOffset", 2, Unsigned),
    Element::fixed(103, "layer2packetSectionSize", 2, Unsigned),
    Element::variable(104, "layer2packetSectionData", Octets),
    Element::fixed(128, "bgpNextAdjacentAsNumber", 4, Unsigned),
    Element::fixed(129, "bgpPrevAdjacentAsNumber", 4, Unsigned),
    Element::fixed(130, "exporterIPv4Address", 4, Ipv4Address),
    Element::fixed(131, "exporterIPv6Address", 16, Ipv6Address),
    Element::fixed(132, "droppedOctetDeltaCount", 8, Unsigned),
    Element::fixed(133, "droppedPacketDeltaCount", 8, Unsigned),
    Element::fixed(134, "droppedOctetTotalCount", 8, Unsigned),
    Element::fixed(135, "droppedPacketTotalCount", 8, Unsigned),
    Element::fixed(136, "flowEndReason", 1, Unsigned),
    Element::fixed(137, "commonPropertiesId", 8, Unsigned),
    Element::fixed(138, "observationPointId", 8, Unsigned),
    Element::fixed(139, "icmpTypeCodeIPv6", 2, Unsigned),
    Element::fixed(140, "mplsTopLabelIPv6Address", 16, Ipv6Address),
    Element::fixed(141, "lineCardId", 4, Unsigned),
    Element::fixed(142, "portId", 4, Unsigned),
    Element::fixed(143, "meteringProcessId", 4, Unsigned),
    Element::fixed(144, "exportingProcessId", 4, Unsigned),
    Element::fixed(145, "templateId", 2, Unsigned),
    Element::fixed(146, "wlanChannelId", 1, Unsigned),
    Element::variable(147, "wlanSSID", String),
    Element::fixed(148, "flowId", 8, Unsigned),
    Element::fixed(149, "observationDomainId", 4, Unsigned),
    Element::fixed(150, "flowStartSeconds", 4, DateTimeSeconds),
    Element::fixed(151, "flowEndSeconds", 4, DateTimeSeconds),
    Element::fixed(152, "flowStartMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(153, "flowEndMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(154, "flowStartMicroseconds", 8, DateTimeMicroseconds),
    Element::fixed(155, "flowEndMicroseconds", 8, DateTimeMicroseconds),
    Element::fixed(156, "flowStartNanoseconds", 8, DateTimeNanoseconds),
    Element::fixed(157, "flowEndNanoseconds", 8, DateTimeNanoseconds),
    Element::fixed(158, "flowStartDeltaMicroseconds", 4, Unsigned),
    Element::fixed(159, "flowEndDeltaMicroseconds", 4, Unsigned),
    Element::fixed(160, "systemInitTimeMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(161, "flowDurationMilliseconds", 4, Unsigned),
    Element::fixed(162, "flowDurationMicroseconds", 4, Unsigned),
    Element::fixed(163, "observedFlowTotalCount", 8, Unsigned),
    Element::fixed(164, "ignoredPacketTotalCount", 8, Unsigned),
    Element::fixed(165, "ignoredOctetTotalCount", 8, Unsigned),
    Element::fixed(166, "notSentFlowTotalCount", 8, Unsigned),
    Element::fixed(167, "notSentPacketTotalCount", 8, Unsigned),
    Element::fixed(168, "notSentOctetTotalCount", 8, Unsigned),
    Element::fixed(169, "destinationIPv6Prefix", 16, Ipv6Address),
    Element::fixed(170, "sourceIPv6Prefix", 16, Ipv6Address),
    Element::fixed(171, "postOctetTotalCount", 8, Unsigned),
    Element::fixed(172, "postPacketTotalCount", 8, Unsigned),
    Element::fixed(173, "flowKeyIndicator", 8, Unsigned),
    Element::fixed(174, "postMCastPacketTotalCount", 8, Unsigned),
    Element::fixed(175, "postMCastOctetTotalCount", 8, Unsigned),
    Element::fixed(176, "icmpTypeIPv4", 1, Unsigned),
    Element::fixed(177, "icmpCodeIPv4", 1, Unsigned),
    Element::fixed(178, "icmpTypeIPv6", 1, Unsigned),
    Element::fixed(179, "icmpCodeIPv6", 1, Unsigned),
    Element::fixed(180, "udpSourcePort", 2, Unsigned),
    Element::fixed(181, "udpDestinationPort", 2, Unsigned),
    Element::fixed(182, "tcpSourcePort", 2, Unsigned),
    Element::fixed(183, "tcpDestinationPort", 2, Unsigned),
    Element::fixed(184, "tcpSequenceNumber", 4, Unsigned),
    Element::fixed(185, "tcpAcknowledgementNumber", 4, Unsigned),
    Element::fixed(186, "tcpWindowSize", 2, Unsigned),
    Element::fixed(187, "tcpUrgentPointer", 2, Unsigned),
    Element::fixed(188, "tcpHeaderLength", 1, Unsigned),
    Element::fixed(189, "ipHeaderLength", 1, Unsigned),
    Element::fixed(190, "totalLengthIPv4", 2, Unsigned),
    Element::fixed(191, "payloadLengthIPv6", 2, Unsigned),
    Element::fixed(192, "ipTTL", 1, Unsigned),
    Element::fixed(193, "nextHeaderIPv6", 1, Unsigned),
    Element::fixed(194, "mplsPayloadLength", 4, Unsigned),
    Element::fixed(195, "ipDiffServCodePoint", 1, Unsigned),
    Element::fixed(196, "ipPrecedence", 1, Unsigned),
    Element::fixed(197, "fragmentFlags", 1, Unsigned),
    Element::fixed(198, "octetDeltaSumOfSquares", 8, Unsigned),
    Element::fixed(199, "octetTotalSumOfSquares", 8, Unsigned),
    Element::fixed(200, "mplsTopLabelTTL", 1, Unsigned),
    Element::fixed(201, "mplsLabelStackLength", 4, Unsigned),
    Element::fixed(202, "mplsLabelStackDepth", 4, Unsigned),
    Element::fixed(203, "mplsTopLabelExp", 1, Unsigned),
    Element::fixed(204, "ipPayloadLength", 4, Unsigned),
    Element::fixed(205, "udpMessageLength", 2, Unsigned),
    Element::fixed(206, "isMulticast", 1, Unsigned),
    Element::fixed(207, "ipv4IHL", 1, Unsigned),
    Element::fixed(208, "ipv4Options", 4, Unsigned),
    Element::fixed(209, "tcpOptions", 8, Unsigned),
    Element::variable(210, "paddingOctets", Octets),
    Element::fixed(211, "collectorIPv4Address", 4, Ipv4Address),
    Element::fixed(212, "collectorIPv6Address", 16, Ipv6Address),
    Element::fixed(213, "exportInterface", 4, Unsigned),
    Element::fixed(214, "exportProtocolVersion", 1, Unsigned),
    Element::fixed(215, "exportTransportProtocol", 1, Unsigned),
    Element::fixed(216, "collectorTransportPort", 2, Unsigned),
    Element::fixed(217, "exporterTransportPort", 2, Unsigned),
    Element::fixed(218, "tcpSynTotalCount", 8, Unsigned),
    Element::fixed(219, "tcpFinTotalCount", 8, Unsigned),
    Element::fixed(220, "tcpRstTotalCount", 8, Unsigned),
    Element::fixed(221, "tcpPshTotalCount", 8, Unsigned),
    Element::fixed(222, "tcpAckTotalCount", 8, Unsigned),
    Element::fixed(223, "tcpUrgTotalCount", 8, Unsigned),
    Element::fixed(224, "ipTotalLength", 8, Unsigned),
    Element::fixed(225, "postNATSourceIPv4Address", 4, Ipv4Address),
    Element::fixed(226, "postNATDestinationIPv4Address", 4, Ipv4Address),
    Element::fixed(227, "postNAPTSourceTransportPort", 2, Unsigned),
    Element::fixed(228, "postNAPTDestinationTransportPort", 2, Unsigned),
    Element::fixed(229, "natOriginatingAddressRealm", 1, Unsigned),
    Element::fixed(230, "natEvent", 1, Unsigned),
    Element::fixed(231, "initiatorOctets", 8, Unsigned),
    Element::fixed(232, "responderOctets", 8, Unsigned),
    Element::fixed(233, "firewallEvent", 1, Unsigned),
    Element::fixed(234, "ingressVRFID", 4, Unsigned),
    Element::fixed(235, "egressVRFID", 4, Unsigned),
    Element::variable(236, "VRFname", String),
    Element::fixed(237, "postMplsTopLabelExp", 1, Unsigned),
    Element::fixed(238, "tcpWindowScale", 2, Unsigned),
    Element::fixed(239, "biflowDirection", 1, Unsigned),
    Element::fixed(240, "ethernetHeaderLength", 1, Unsigned),
    Element::fixed(241, "ethernetPayloadLength", 2, Unsigned),
    Element::fixed(242, "ethernetTotalLength", 2, Unsigned),
    Element::fixed(243, "dot1qVlanId", 2, Unsigned),
    Element::fixed(244, "dot1qPriority", 1, Unsigned),
    Element::fixed(245, "dot1qCustomerVlanId", 2, Unsigned),
    Element::fixed(246, "dot1qCustomerPriority", 1, Unsigned),
    Element::variable(247, "metroEvcId", String),
    Element::fixed(248, "metroEvcType", 1, Unsigned),
    Element::fixed(249, "pseudoWireId", 4, Unsigned),
    Element::fixed(250, "pseudoWireType", 2, Unsigned),
    Element::fixed(251, "pseudoWireControlWord", 4, Unsigned),
    Element::fixed(252, "ingressPhysicalInterface", 4, Unsigned),
    Element::fixed(253, "egressPhysicalInterface", 4, Unsigned),
    Element::fixed(254, "postDot1qVlanId", 2, Unsigned),
    Element::fixed(255, "postDot1qCustomerVlanId", 2, Unsigned),
    Element::fixed(256, "ethernetType", 2, Unsigned),
    Element::fixed(257, "postIpPrecedence", 1, Unsigned),
    Element::fixed(258, "collectionTimeMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(259, "exportSctpStreamId", 2, Unsigned),
    Element::fixed(260, "maxExportSeconds", 4, DateTimeSeconds),
    Element::fixed(261, "maxFlowEndSeconds", 4, DateTimeSeconds),
    Element::variable(262, "messageMD5Checksum", Octets),
    Element::fixed(263, "messageScope", 1, Unsigned),
    Element::fixed(264, "minExportSeconds", 4, DateTimeSeconds),
    Element::fixed(265, "minFlowStartSeconds", 4, DateTimeSeconds),
    Element::variable(266, "opaqueOctets", Octets),
    Element::fixed(267, "sessionScope", 1, Unsigned),
    Element::fixed(268, "maxFlowEndMicroseconds", 8, DateTimeMicroseconds),
    Element::fixed(269, "maxFlowEndMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(270, "maxFlowEndNanoseconds", 8, DateTimeNanoseconds),
    Element::fixed(271, "minFlowStartMicroseconds", 8, DateTimeMicroseconds),
    Element::fixed(272, "minFlowStartMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(273, "minFlowStartNanoseconds", 8, DateTimeNanoseconds),
    Element::variable(274, "collectorCertificate", Octets),
    Element::variable(275, "exporterCertificate", Octets),
    Element::fixed(276, "dataRecordsReliability", 1, Boolean),
    Element::fixed(277, "observationPointType", 1, Unsigned),
    Element::fixed(278, "newConnectionDeltaCount", 4, Unsigned),
    Element::fixed(279, "connectionSumDurationSeconds", 8, Unsigned),
    Element::fixed(280, "connectionTransactionId", 8, Unsigned),
    Element::fixed(298, "initiatorPackets", 8, Unsigned),
    Element::fixed(299, "responderPackets", 8, Unsigned),
    Element::variable(300, "observationDomainName", String),
    Element::fixed(301, "selectionSequenceId", 8, Unsigned),
    Element::fixed(302, "selectorId", 8, Unsigned),
    Element::fixed(303, "informationElementId", 2, Unsigned),
    Element::fixed(304, "selectorAlgorithm", 2, Unsigned),
    Element::fixed(305, "samplingPacketInterval", 4, Unsigned),
    Element::fixed(306, "samplingPacketSpace", 4, Unsigned),
    Element::fixed(307, "samplingTimeInterval", 4, Unsigned),
    Element::fixed(308, "samplingTimeSpace", 4, Unsigned),
    Element::fixed(309, "samplingSize", 4, Unsigned),
    Element::fixed(310, "samplingPopulation", 4, Unsigned),
    Element::fixed(311, "samplingProbability", 8, Float),
    Element::fixed(312, "dataLinkFrameSize", 2, Unsigned),
    Element::variable(313, "ipHeaderPacketSection", Octets),
    Element::variable(314, "ipPayloadPacketSection", Octets),
    Element::variable(315, "dataLinkFrameSection", Octets),
    Element::variable(316, "mplsLabelStackSection", Octets),
    Element::variable(317, "mplsPayloadPacketSection", Octets),
    Element::fixed(318, "selectorIdTotalPktsObserved", 8, Unsigned),
    Element::fixed(319, "selectorIdTotalPktsSelected", 8, Unsigned),
    Element::fixed(320, "absoluteError", 8, Float),
    Element::fixed(321, "relativeError", 8, Float),
    Element::fixed(322, "observationTimeSeconds", 4, DateTimeSeconds),
    Element::fixed(323, "observationTimeMilliseconds", 8, DateTimeMilliseconds),
    Element::fixed(324, "observationTimeMicroseconds", 8, DateTimeMicroseconds),
    Element::fixed(325, "observationTimeNanoseconds", 8, DateTimeNanoseconds),
    Element::fixed(326, "digestHashValue", 8, Unsigned),
    Element::fixed(327, "hashIPPayloadOffset", 8, Unsigned),
    Element::fixed(328, "hashIPPayloadSize", 8, Unsigned),
    Element::fixed(329, "hashOutputRangeMin", 8, Unsigned),
    Element::fixed(330, "hashOutputRangeMax", 8, Unsigned),
    Element::fixed(331, "hashSelectedRangeMin", 8, Unsigned),
    Element::fixed(332, "hashSelectedRangeMax", 8, Unsigned),
    Element::fixed(333, "hashDigestOutput", 1, Boolean),
    Element::fixed(334, "hashInitialiserValue", 8, Unsigned),
    Element::variable(335, "selectorName", String),
    Element::fixed(336, "upperCILimit", 8, Float),
    Element::fixed(337, "lowerCILimit", 8, Float),
    Element::fixed(338, "confidenceLevel", 8, Float),
    Element::fixed(346, "privateEnterpriseNumber", 4, Unsigned),
    Element::fixed(351, "layer2SegmentId", 8, Unsigned),
    Element::fixed(352, "layer2OctetDeltaCount", 8, Unsigned),
    Element::fixed(353, "layer2OctetTotalCount", 8, Unsigned),
    Element::fixed(354, "ingressUnicastPacketTotalCount", 8, Unsigned),
    Element::fixed(355, "ingressMulticastPacketTotalCount", 8, Unsigned),
    Element::fixed(356, "ingressBroadcastPacketTotalCount", 8, Unsigned),
    Element::fixed(357, "egressUnicastPacketTotalCount", 8, Unsigned),
    Element::fixed(358, "egressBroadcastPacketTotalCount", 8, Unsigned),
    Element::fixed(359, "monitoringIntervalStartMilliSeconds", 8, DateTimeMilliseconds),
    Element::fixed(360, "monitoringIntervalEndMilliSeconds", 8, DateTimeMilliseconds),
    Element::fixed(361, "portRangeStart", 2, Unsigned),
    Element::fixed(362, "portRangeEnd", 2, Unsigned),
    Element::fixed(363, "portRangeStepSize", 2, Unsigned),
    Element::fixed(364, "portRangeNumPorts", 2, Unsigned),
    Element::fixed(365, "staMacAddress", 6, MacAddress),
    Element::fixed(366, "staIPv4Address", 4, Ipv4Address),
    Element::fixed(367, "wtpMacAddress", 6, MacAddress),
    Element::fixed(368, "ingressInterfaceType", 4, Unsigned),
    Element::fixed(369, "egressInterfaceType", 4, Unsigned),
    Element::fixed(370, "rtpSequenceNumber", 2, Unsigned),
    Element::variable(371, "userName", String),
    Element::variable(372, "applicationCategoryName", String),
    Element::variable(373, "applicationSubCategoryName", String),
    Element::variable(374, "applicationGroupName", String),
    Element::fixed(375, "originalFlowsPresent", 8, Unsigned),
    Element::fixed(376, "originalFlowsInitiated", 8, Unsigned),
    Element::fixed(377, "originalFlowsCompleted", 8, Unsigned),
    Element::fixed(378, "distinctCountOfSourceIPAddress", 8, Unsigned),
    Element::fixed(379, "distinctCountOfDestinationIPAddress", 8, Unsigned),
    Element::fixed(380, "distinctCountOfSourceIPv4Address", 4, Unsigned),
    Element::fixed(381, "distinctCountOfDestinationIPv4Address", 4, Unsigned),
    Element::fixed(382, "distinctCountOfSourceIPv6Address", 8, Unsigned),
    Element::fixed(383, "distinctCountOfDestinationIPv6Address", 8, Unsigned),
    Element::fixed(384, "valueDistributionMethod", 1, Unsigned),
    Element::fixed(385, "rfc3550JitterMilliseconds", 4, Unsigned),
    Element::fixed(386, "rfc3550JitterMicroseconds", 4, Unsigned),
    Element::fixed(387, "rfc3550JitterNanoseconds", 4, Unsigned),
    Element::fixed(388, "dot1qDEI", 1, Boolean),
    Element::fixed(389, "dot1qCustomerDEI", 1, Boolean),
    Element::fixed(390, "flowSelectorAlgorithm", 2, Unsigned),
    Element::fixed(391, "flowSelectedOctetDeltaCount", 8, Unsigned),
    Element::fixed(392, "flowSelectedPacketDeltaCount", 8, Unsigned),
    Element::fixed(393, "flowSelectedFlowDeltaCount", 8, Unsigned),
    Element::fixed(394, "selectorIDTotalFlowsObserved", 8, Unsigned),
    Element::fixed(395, "selectorIDTotalFlowsSelected", 8, Unsigned),
    Element::fixed(396, "samplingFlowInterval", 8, Unsigned),
    Element::fixed(397, "samplingFlowSpacing", 8, Unsigned),
    Element::fixed(398, "flowSamplingTimeInterval", 8, Unsigned),
    Element::fixed(399, "flowSamplingTimeSpacing", 8, Unsigned),
    Element::fixed(400, "hashFlowDomain", 2, Unsigned),
    Element::fixed(401, "transportOctetDeltaCount", 8, Unsigned),
    Element::fixed(402, "transportPacketDeltaCount", 8, Unsigned),
    Element::fixed(403, "originalExporterIPv4Address", 4, Ipv4Address),
    Element::fixed(404, "originalExporterIPv6Address", 16, Ipv6Address),
    Element::fixed(405, "originalObservationDomainId", 4, Unsigned),
    Element::fixed(406, "intermediateProcessId", 4, Unsigned),
    Element::fixed(407, "ignoredDataRecordTotalCount", 8, Unsigned),
    Element::fixed(408, "dataLinkFrameType", 2, Unsigned),
    Element::fixed(409, "sectionOffset", 2, Unsigned),
    Element::fixed(410, "sectionExportedOctets", 2, Unsigned),
    Element::variable(411, "dot1qServiceInstanceTag", Octets),
    Element::fixed(412, "dot1qServiceInstanceId", 4, Unsigned),
    Element::fixed(413, "dot1qServiceInstancePriority", 1, Unsigned),
    Element::fixed(414, "dot1qCustomerSourceMacAddress", 6, MacAddress),
    Element::fixed(415, "dot1qCustomerDestinationMacAddress", 6, MacAddress),
    Element::fixed(417, "postLayer2OctetDeltaCount", 8, Unsigned),
    Element::fixed(418, "postMCastLayer2OctetDeltaCount", 8, Unsigned),
    Element::fixed(420, "postLayer2OctetTotalCount", 8, Unsigned),
    Element::fixed(421, "postMCastLayer2OctetTotalCount", 8, Unsigned),
    Element::fixed(422, "minimumLayer2TotalLength", 8, Unsigned),
    Element::fixed(423, "maximumLayer2TotalLength", 8, Unsigned),
    Element::fixed(424, "droppedLayer2OctetDeltaCount", 8, Unsigned),
    Element::fixed(425, "droppedLayer2OctetTotalCount", 8, Unsigned),
    Element::fixed(426, "ignoredLayer2OctetTotalCount", 8, Unsigned),
    Element::fixed(427, "notSentLayer2OctetTotalCount", 8, Unsigned),
    Element::fixed(428, "layer2OctetDeltaSumOfSquares", 8, Unsigned),
    Element::fixed(429, "layer2OctetTotalSumOfSquares", 8, Unsigned),
    Element::fixed(430, "layer2FrameDeltaCount", 8, Unsigned),
    Element::fixed(431, "layer2FrameTotalCount", 8, Unsigned),
    Element::fixed(432, "pseudoWireDestinationIPv4Address", 4, Ipv4Address),
    Element::fixed(433, "ignoredLayer2FrameTotalCount", 8, Unsigned),
    Element::fixed(434, "mibObjectValueInteger", 4, Signed),
    Element::variable(435, "mibObjectValueOctetString", Octets),
    Element::variable(436, "mibObjectValueOID", Octets),
    Element::variable(437, "mibObjectValueBits", Octets),
    Element::fixed(438, "mibObjectValueIPAddress", 4, Ipv4Address),
    Element::fixed(439, "mibObjectValueCounter", 8, Unsigned),
    Element::fixed(440, "mibObjectValueGauge", 4, Unsigned),
    Element::fixed(441, "mibObjectValueTimeTicks", 4, Unsigned),
    Element::fixed(442, "mibObjectValueUnsigned", 4, Unsigned),
    Element::variable(445, "mibObjectIdentifier", Octets),
    Element::fixed(446, "mibSubIdentifier", 4, Unsigned),
    Element::fixed(447, "mibIndexIndicator", 8, Unsigned),
    Element::fixed(448, "mibCaptureTimeSemantics", 1, Unsigned),
    Element::variable(449, "mibContextEngineID", Octets),
    Element::variable(450, "mibContextName", String),
    Element::variable(451, "mibObjectName", String),
    Element::variable(452, "mibObjectDescription", String),
    Element::variable(453, "mibObjectSyntax", String),
    Element::variable(454, "mibModuleName", String),
    Element::variable(455, "mobileIMSI", String),
    Element::variable(456, "mobileMSISDN", String),
    Element::fixed(457, "httpStatusCode", 2, Unsigned),
    Element::fixed(458, "sourceTransportPortsLimit", 2, Unsigned),
    Element::variable(459, "httpRequestMethod", String),
    Element::variable(460, "httpRequestHost", String),
    Element::variable(461, "httpRequestTarget", String),
    Element::variable(462, "httpMessageVersion", String),
    Element::fixed(463, "natInstanceID", 4, Unsigned),
    Element::variable(464, "internalAddressRealm", Octets),
    Element::variable(465, "externalAddressRealm", Octets),
    Element::fixed(466, "natQuotaExceededEvent", 4, Unsigned),
    Element::fixed(467, "natThresholdEvent", 4, Unsigned),
    Element::variable(468, "httpUserAgent", String),
    Element::variable(469, "httpContentType", String),
    Element::variable(470, "httpReasonPhrase", String),
    Element::fixed(471, "maxSessionEntries", 4, Unsigned),
    Element::fixed(472, "maxBIBEntries", 4, Unsigned),
    Element::fixed(473, "maxEntriesPerUser", 4, Unsigned),
    Element::fixed(474, "maxSubscribers", 4, Unsigned),
    Element::fixed(475, "maxFragmentsPendingReassembly", 4, Unsigned),
    Element::fixed(476, "addressPoolHighThreshold", 4, Unsigned),
    Element::fixed(477, "addressPoolLowThreshold", 4, Unsigned),
    Element::fixed(478, "addressPortMappingHighThreshold", 4, Unsigned),
    Element::fixed(479, "addressPortMappingLowThreshold", 4, Unsigned),
    Element::fixed(480, "addressPortMappingPerUserHighThreshold", 4, Unsigned),
    Element::fixed(481, "globalAddressMappingHighThreshold", 4, Unsigned),
    Element::variable(482, "vpnIdentifier", Octets),
    Element::fixed(483, "bgpCommunity", 4, Unsigned),
    Element::fixed(486, "bgpExtendedCommunity", 8, Octets),
    Element::fixed(489, "bgpLargeCommunity", 12, Octets),
    Element::fixed(492, "srhFlagsIPv6", 1, Unsigned),
    Element::fixed(493, "srhTagIPv6", 2, Unsigned),
    Element::fixed(494, "srhSegmentIPv6", 16, Ipv6Address),
    Element::fixed(495, "srhActiveSegmentIPv6", 16, Ipv6Address),
    Element::variable(497, "srhSegmentIPv6ListSection", Octets),
    Element::fixed(498, "srhSegmentsIPv6Left", 1, Unsigned),
    Element::variable(499, "srhIPv6Section", Octets),
    Element::fixed(500, "srhIPv6ActiveSegmentType", 1, Unsigned),
    Element::fixed(501, "srhSegmentIPv6LocatorLength", 1, Unsigned),
    Element::fixed(502, "srhSegmentIPv6EndpointBehavior", 2, Unsigned),
    Element::fixed(503, "transportChecksum", 2, Unsigned),
    Element::variable(504, "icmpHeaderPacketSection", Octets),
    Element::fixed(505, "gtpuFlags", 1, Unsigned),
    Element::fixed(506, "gtpuMsgType", 1, Unsigned),
    Element::fixed(507, "gtpuTEid", 4, Unsigned),
    Element::fixed(508, "gtpuSequenceNum", 2, Unsigned),
    Element::fixed(509, "gtpuQFI", 1, Unsigned),
    Element::fixed(510, "gtpuPduType", 1, Unsigned),
    Element::fixed(513, "ipv6ExtensionHeaderType", 1, Unsigned),
    Element::fixed(514, "ipv6ExtensionHeaderCount", 1, Unsigned),
    Element::fixed(517, "ipv6ExtensionHeadersLimit", 1, Boolean),
    Element::fixed(518, "ipv6ExtensionHeadersChainLength", 4, Unsigned),
    Element::fixed(521, "tcpSharedOptionExID16", 2, Unsigned),
    Element::fixed(522, "tcpSharedOptionExID32", 4, Unsigned),
    Element::fixed(526, "udpUnsafeOptions", 8, Unsigned),
    Element::fixed(527, "udpExID", 2, Unsigned),
];
